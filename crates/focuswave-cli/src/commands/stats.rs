pub fn run(user_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let service = super::open_service()?;
    match service.stats(user_id)? {
        Some(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
        None => println!("null"),
    }
    Ok(())
}
