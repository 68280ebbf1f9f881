// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use imgcrawl::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_idempotent() {
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    tracing::info!(job = "test_job", files = 3, "Structured log after init");
}
