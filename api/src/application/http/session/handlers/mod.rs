pub mod add_person;
pub mod commit_split;
pub mod create_session;
pub mod finalize_session;
pub mod get_allocation;
pub mod get_session;
pub mod remove_person;
pub mod update_person;
