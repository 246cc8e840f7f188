//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard building blocks from props and report user
//! intent through callbacks; none of them talk to the network.

pub mod stat_card;
pub mod toast_stack;
pub mod workout_form;
pub mod workout_list;
