//! First-run checklist for new partners.

pub(crate) mod steps;
