mod arena;
mod balance;
mod handle;
mod node;
mod raw_llrb_map;
mod size;
mod validate;

pub(crate) use handle::Handle;
pub(crate) use raw_llrb_map::RawLLRBMap;
