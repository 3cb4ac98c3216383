
use assertables::*;
use httpmock::Method::*;
use kf_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;

// Everything the drivers print, as one string
fn output_of(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}
