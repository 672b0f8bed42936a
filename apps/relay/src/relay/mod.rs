// Resume review relay: prompt construction, the shared relay call and the
// two entry points (JSON body and plain-text body).

pub mod handlers;
pub mod prompts;
pub mod suggest;
