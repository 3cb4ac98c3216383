
use assertables::*;
use kf_core::prelude::*;
use rstest::*;

use super::*;
