use seqlog::Logger;

fn main() {
    let logger = Logger::new("log.log")
        .expect("unable to open log file")
        .with_console_mirroring(true);

    logger.warn("demo", "This is a warning").unwrap();
    logger.info("demo", "This is an info").unwrap();
    logger.error("demo", "This is an error").unwrap();

    let content = std::fs::read_to_string("log.log").unwrap();
    println!("\n--- log.log now holds {} lines ---", content.lines().count());
}
