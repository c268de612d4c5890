//! Command-line interface definitions

pub mod args;

pub use args::{
    Cli, Commands, CvxCodesArgs, DgcCertsArgs, DgcValueSetsArgs, IcaoMasterListArgs,
    Icd11CodesArgs, NlKeysArgs, ShcCertsArgs,
};
