//! Visitor session flags
//!
//! Built once at startup and handed to whatever needs them; nothing reads
//! these from ambient storage.

use shared::models::RsvpRequest;

use crate::{ClientResult, SeatingApi};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Site password accepted
    pub authenticated: bool,
    /// This visitor has sent an RSVP
    pub rsvp_submitted: bool,
}

impl Session {
    /// Restore a session from previously persisted flags
    pub fn new(authenticated: bool, rsvp_submitted: bool) -> Self {
        Self {
            authenticated,
            rsvp_submitted,
        }
    }

    /// Check the site password; a wrong password leaves the session locked
    pub async fn unlock<A: SeatingApi + ?Sized>(
        &mut self,
        api: &A,
        password: &str,
    ) -> ClientResult<bool> {
        let accepted = api.check_access(password).await?;
        self.authenticated |= accepted;
        Ok(accepted)
    }

    /// Send an RSVP and remember that this visitor has responded
    pub async fn submit_rsvp<A: SeatingApi + ?Sized>(
        &mut self,
        api: &A,
        rsvp: &RsvpRequest,
    ) -> ClientResult<String> {
        let message = api.submit_rsvp(rsvp).await?;
        self.rsvp_submitted = true;
        Ok(message)
    }
}
