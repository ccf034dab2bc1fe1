#![no_main]
use libfuzzer_sys::fuzz_target;
use linelog::fmt::{FormatTemplate, PrefixContext, render_prefix};
use linelog::{Level, PrefixLevel, Settings};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let template = FormatTemplate::parse(data);
    let _ = template.render_with(|_| Some(String::from("x")));

    let settings = Settings {
        prefix_format: data.to_string(),
        prefix_level: PrefixLevel::Full,
        user_header: "[fuzz]".to_string(),
        ..Settings::default()
    };
    let ctx = PrefixContext::new(Level::Warning, "fuzz.rs", 1);
    let _ = render_prefix(&settings, &ctx);
});
