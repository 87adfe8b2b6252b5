pub mod draft;
pub mod edit;
pub mod participants;
pub mod search;

pub use draft::{AppointmentDraft, AppointmentPayload, DurationMinutes, ValidatedDraft};
pub use edit::draft_from_stored;
pub use participants::{Participant, StoredParticipant, normalize_participants};
pub use search::filter_appointments;
