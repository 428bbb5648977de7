use clap::Args;
use focuswave_core::{CaffeineIntake, ExerciseFrequency, LifestyleInput, WorkType};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Existing user id to re-analyze (a new id is generated if omitted)
    #[arg(long)]
    pub user: Option<String>,
    /// Age in years
    #[arg(long)]
    pub age: u32,
    /// Average sleep per night, hours
    #[arg(long)]
    pub sleep_hours: f64,
    /// Stress level, 1-10
    #[arg(long)]
    pub stress_level: u8,
    /// Exercise frequency: daily, weekly, occasionally, rarely
    #[arg(long)]
    pub exercise: ExerciseFrequency,
    /// Caffeine intake: none, low, moderate, high
    #[arg(long)]
    pub caffeine: CaffeineIntake,
    /// Daily screen time, hours
    #[arg(long)]
    pub screen_time: f64,
    /// Work type: creative, analytical, physical, mixed
    #[arg(long)]
    pub work_type: Option<WorkType>,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = LifestyleInput {
        age: args.age,
        sleep_hours: args.sleep_hours,
        stress_level: args.stress_level,
        exercise: args.exercise,
        caffeine: args.caffeine,
        screen_time_hours: args.screen_time,
        work_type: args.work_type,
    };

    let mut service = super::open_service()?;
    let outcome = service.analyze(args.user, input)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
