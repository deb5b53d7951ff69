//! Step definitions for behavioural scenarios.

mod fragmentator_steps;
