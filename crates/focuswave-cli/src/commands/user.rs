use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserAction {
    /// Print a user record as JSON
    Show {
        /// User id
        user_id: String,
    },
}

pub fn run(action: UserAction) -> Result<(), Box<dyn std::error::Error>> {
    let service = super::open_service()?;
    match action {
        UserAction::Show { user_id } => {
            let user = service.get_user(&user_id)?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }
    Ok(())
}
