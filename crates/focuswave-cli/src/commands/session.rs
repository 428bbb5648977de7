use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a focus session for a user
    Start {
        /// Owning user id
        user_id: String,
    },
    /// Record a concentration lapse (pauses the session, starts the cue)
    Lapse {
        /// Session id
        session_id: String,
    },
    /// Record a refocus (resumes the session, stops the cue)
    Refocus {
        /// Session id
        session_id: String,
    },
    /// End a session and finalize duration and efficiency
    End {
        /// Session id
        session_id: String,
    },
    /// List a user's recent sessions, newest first
    List {
        /// User id
        user_id: String,
        /// Include sessions that were never completed
        #[arg(long)]
        all: bool,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut service = super::open_service()?;

    let record = match action {
        SessionAction::Start { user_id } => service.start_session(&user_id)?,
        SessionAction::Lapse { session_id } => service.record_lapse(&session_id)?,
        SessionAction::Refocus { session_id } => service.record_refocus(&session_id)?,
        SessionAction::End { session_id } => service.end_session(&session_id)?,
        SessionAction::List { user_id, all } => {
            let sessions = service.list_recent_sessions(&user_id, !all)?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
