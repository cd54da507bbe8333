use seqlog::{Logger, facade};

fn main() {
    let path = "/tmp/seqlog_example_facade.log";
    let _ = std::fs::remove_file(path);

    let logger = Logger::new(path)
        .expect("unable to open log file")
        .with_console_mirroring(true);
    facade::init_global(logger).unwrap();

    log::info!("Hello, world!");
    log::warn!("disk at 90%");
    log::error!("connection refused");

    let content = std::fs::read_to_string(path).unwrap();
    println!(
        "\nlast line of {path} is:\n\t{}",
        content.trim_end().lines().last().unwrap()
    );
}
