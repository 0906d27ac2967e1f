pub mod paths;
pub mod process;
pub mod report;

pub const FILTER_SPEC: &str = "mksymbols=debug,mksymbols_common=debug,info";
