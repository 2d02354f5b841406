//! 自定义helper

mod basic;
mod casing;

pub use basic::{
    java_package_segments, ToFlatHelper, ToJavaPackageHelper, ToJavaPackagePathHelper,
    ToLowerHelper, ToTitleHelper, ToUpperHelper,
};
pub use casing::ToCaseHelper;
