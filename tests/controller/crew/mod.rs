mod change_status;

use super::*;
