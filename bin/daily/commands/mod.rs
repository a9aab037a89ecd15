pub mod countdown;
pub mod history;
pub mod leaderboard;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod submit;
pub mod today;
