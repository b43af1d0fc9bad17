//! Domain-level front-end features. Routes import these modules so view code
//! stays focused on rendering while form logic and API handling live in
//! dedicated feature areas.

pub mod otp;
