#![no_main]
use libfuzzer_sys::fuzz_target;
use linelog::{Level, Logger, MemorySink};

fuzz_target!(|data: &str| {
    let sink = MemorySink::new().with_width(40);
    let logger = Logger::builder()
        .clean_line_before_print(true)
        .sink(sink.clone())
        .build();
    logger.info().write(data);
    logger.log(Level::Fatal).write(data).endl();
    let _ = logger.info().printf(data, &[]);
});
