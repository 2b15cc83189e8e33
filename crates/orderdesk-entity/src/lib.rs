//! # orderdesk-entity
//!
//! Domain entity models for OrderDesk. Entities guard their own invariants:
//! an [`order::Order`] can only be obtained from storage or from a validated
//! [`order::CreateOrder`], and its status only moves forward.

pub mod order;
