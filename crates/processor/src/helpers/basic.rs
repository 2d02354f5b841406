//! 单参数helper：大小写、标题、flat以及Java包名转换。

use convert_case::{Case, Casing};
use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};

use crate::first_param;

/// 转为全大写
#[derive(Clone, Copy)]
pub struct ToUpperHelper;

impl HelperDef for ToUpperHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = first_param(h)?;
        out.write(&rendered.to_uppercase())?;
        Ok(())
    }
}

/// 转为全小写
#[derive(Clone, Copy)]
pub struct ToLowerHelper;

impl HelperDef for ToLowerHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = first_param(h)?;
        out.write(&rendered.to_lowercase())?;
        Ok(())
    }
}

/// 转为标题格式，虚词保持小写
#[derive(Clone, Copy)]
pub struct ToTitleHelper;

impl HelperDef for ToTitleHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = first_param(h)?;
        out.write(&titlecase::titlecase(&rendered))?;
        Ok(())
    }
}

/// 去掉所有分隔符并转为小写，例如 `My-Module` -> `mymodule`
#[derive(Clone, Copy)]
pub struct ToFlatHelper;

impl HelperDef for ToFlatHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = first_param(h)?;
        out.write(&rendered.to_case(Case::Flat))?;
        Ok(())
    }
}

/// 转为Java包名，例如 `com.Example.my-module` -> `com.example.mymodule`
#[derive(Clone, Copy)]
pub struct ToJavaPackageHelper;

impl HelperDef for ToJavaPackageHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = first_param(h)?;
        out.write(&java_package_segments(&rendered).join("."))?;
        Ok(())
    }
}

/// 转为Java包对应的目录路径，例如 `com.example.app` -> `com/example/app`
#[derive(Clone, Copy)]
pub struct ToJavaPackagePathHelper;

impl HelperDef for ToJavaPackagePathHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let rendered = first_param(h)?;
        out.write(&java_package_segments(&rendered).join("/"))?;
        Ok(())
    }
}

/// 按 `.`、`/`、`\` 拆分为包段，每段转为flat格式，丢弃空段
pub fn java_package_segments(value: &str) -> Vec<String> {
    value
        .split(|c| matches!(c, '.' | '/' | '\\'))
        .map(|segment| segment.to_case(Case::Flat))
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_package_segments() {
        assert_eq!(
            java_package_segments("com.Example.my-module"),
            vec!["com", "example", "mymodule"]
        );
        assert_eq!(
            java_package_segments("com/example//app"),
            vec!["com", "example", "app"]
        );
        assert!(java_package_segments("").is_empty());
    }
}
