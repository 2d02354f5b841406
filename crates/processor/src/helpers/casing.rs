//! [ToCaseHelper]

use convert_case::{Case, Casing};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, JsonRender, Output, RenderContext,
    RenderError,
};

/// 把第二个参数从任意格式转换为第一个参数指定的格式。
/// 支持的格式：
/// - toggle
/// - pascal
/// - camel
/// - upper-camel
/// - snake
/// - upper-snake
/// - screaming-snake
/// - kebab
/// - cobol
/// - train
/// - flat
/// - upper-flat
/// - alternating
#[derive(Clone, Copy)]
pub struct ToCaseHelper;

impl HelperDef for ToCaseHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let case_type = h
            .param(0)
            .ok_or_else(|| RenderError::new("case type (e.g. 'snake' or 'camel') not specified"))?
            .value()
            .render();

        let case = parse_case(&case_type)?;

        let value = h
            .param(1)
            .ok_or_else(|| RenderError::new("argument to process not specified"))?;

        out.write(&value.value().render().to_case(case))?;
        Ok(())
    }
}

/// 格式名本身也允许写成任意格式，例如 `UpperCamel`
fn parse_case(case_type: &str) -> Result<Case, RenderError> {
    match case_type.to_case(Case::Kebab).as_str() {
        "toggle" => Ok(Case::Toggle),
        "pascal" => Ok(Case::Pascal),
        "camel" => Ok(Case::Camel),
        "upper-camel" => Ok(Case::UpperCamel),
        "snake" => Ok(Case::Snake),
        "upper-snake" => Ok(Case::UpperSnake),
        "screaming-snake" => Ok(Case::ScreamingSnake),
        "kebab" => Ok(Case::Kebab),
        "cobol" => Ok(Case::Cobol),
        "train" => Ok(Case::Train),
        "flat" => Ok(Case::Flat),
        "upper-flat" => Ok(Case::UpperFlat),
        "alternating" => Ok(Case::Alternating),
        "" => Err(RenderError::new(
            "try putting the name of your desired case in quotation marks e.g. \"snake\"",
        )),
        _ => Err(RenderError::new(format!(
            "case '{case_type}' not supported"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_normalises_name() {
        assert!(matches!(parse_case("snake"), Ok(Case::Snake)));
        assert!(matches!(parse_case("UpperCamel"), Ok(Case::UpperCamel)));
        assert!(matches!(parse_case("screaming_snake"), Ok(Case::ScreamingSnake)));
    }

    #[test]
    fn test_parse_case_rejects_unknown() {
        assert!(parse_case("shouting").is_err());
        assert!(parse_case("").is_err());
    }
}
