mod scratch_store;

pub use scratch_store::LocalScratchStore;
