mod utils;
mod validator_tests;
