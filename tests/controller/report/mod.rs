mod export;

use super::*;
