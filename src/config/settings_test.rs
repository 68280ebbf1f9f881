// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::*;

#[test]
fn test_settings_defaults() {
    let settings = Settings::new().expect("default settings should load");

    assert_eq!(settings.server.port, 1337);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.storage.output_dir, ".");
    assert_eq!(settings.crawler.request_timeout(), Duration::from_secs(30));
    assert_eq!(settings.crawler.per_page_concurrency, 1);
    assert!(settings.crawler.user_agent.starts_with("imgcrawl/"));
    assert!(settings.telemetry.prometheus_addr.is_none());
    assert_eq!(settings.listen_addr(), "0.0.0.0:1337");
}

#[test]
fn test_crawler_settings_default_matches_loaded_defaults() {
    let defaults = CrawlerSettings::default();
    assert_eq!(defaults.request_timeout_secs, 30);
    assert_eq!(defaults.per_page_concurrency, 1);
    assert_eq!(defaults.user_agent, default_user_agent());
}
