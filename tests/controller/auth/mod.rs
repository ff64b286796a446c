mod login;
mod logout;

use super::*;
