use std::sync::Arc;

use seqlog::Logger;

fn main() {
    let path = "/tmp/seqlog_example_threads.log";
    let _ = std::fs::remove_file(path);

    let logger = Arc::new(
        Logger::new(path)
            .expect("unable to open log file")
            .with_console_mirroring(true),
    );

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for n in 0..10 {
                    logger
                        .info(&format!("thread {i}"), &format!("message {n}"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = std::fs::read_to_string(path).unwrap().lines().count();
    println!("\n--- {path} holds {lines} lines ---");
    assert_eq!(lines, 50, "every record should land as exactly one line");
}
