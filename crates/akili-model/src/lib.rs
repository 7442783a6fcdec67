pub mod certificate;
pub mod chat;
pub mod profile;
pub mod quiz;
pub mod tab;
pub mod track;
