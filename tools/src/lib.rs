// Licensed under the Apache-2.0 license

pub mod bin2data;
pub mod expected;

pub use bin2data::{bin_to_data, convert, default_output_path};
pub use expected::{expected_values, render_expected, ExpectedValues};
