/*
[INPUT]:  REST parameter maps and raw HTTP responses
[OUTPUT]: Typed request parameters and status/body response pairs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When request encoding or response shape changes
*/

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
