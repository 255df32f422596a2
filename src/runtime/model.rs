// 机型变体的固定属性表与项目号匹配

// 机型相关的输出属性键
pub(super) const KEY_PRODUCT_MODEL: &str = "ro.product.model";
pub(super) const KEY_COMMON_SOFT: &str = "ro.common.soft";
pub(super) const KEY_PRODUCT_NAME: &str = "ro.product.name";
pub(super) const KEY_BUILD_PRODUCT: &str = "ro.build.product";
pub(super) const KEY_BUILD_FINGERPRINT: &str = "ro.build.fingerprint";
pub(super) const KEY_BUILD_DESCRIPTION: &str = "ro.build.description";

// 单个机型变体的完整出厂属性集
pub(super) struct VariantSpec {
    pub(super) code: &'static str,
    pub(super) model: &'static str,
    pub(super) soft_version: &'static str,
    pub(super) name: &'static str,
    pub(super) product: &'static str,
    pub(super) fingerprint: &'static str,
    pub(super) description: &'static str,
}

// R1C 各销售版本的项目号与出厂属性
static VARIANTS: [VariantSpec; 3] = [
    VariantSpec {
        code: "14045",
        model: "R8207",
        soft_version: "MSM_14045",
        name: "R8207",
        product: "R8207",
        fingerprint: "OPPO/R8207/R1C:4.4.4/KTU84P/1390465867:user/release-keys",
        description: "msm8916_32-user 4.4.4 KTU84P eng.root.20151213 release-keys",
    },
    VariantSpec {
        code: "14046",
        model: "R8200",
        soft_version: "MSM_14046",
        name: "R8200",
        product: "R8200",
        fingerprint: "OPPO/R8200/R1C:4.4.4/KTU84P/1390465867:user/release-keys",
        description: "msm8916_32-user 4.4.4 KTU84P eng.root.20150515 release-keys",
    },
    VariantSpec {
        code: "14047",
        model: "R8205",
        soft_version: "MSM_14047",
        name: "R8205",
        product: "R8205",
        fingerprint: "OPPO/R8205/R1C:4.4.4/KTU84P/1390465867:user/release-keys",
        description: "msm8916_32-user 4.4.4 KTU84P eng.root.20151215 release-keys",
    },
];

// 项目号必须与已知机型完全一致，包含已知码的更长 token 不算匹配
pub(super) fn match_variant(code: &str) -> Option<&'static VariantSpec> {
    VARIANTS.iter().find(|variant| variant.code == code)
}

#[cfg(test)]
mod tests {
    use super::match_variant;

    #[test]
    fn known_codes_resolve_to_models() {
        assert_eq!(match_variant("14045").map(|variant| variant.model), Some("R8207"));
        assert_eq!(match_variant("14046").map(|variant| variant.model), Some("R8200"));
        assert_eq!(match_variant("14047").map(|variant| variant.model), Some("R8205"));
    }

    #[test]
    fn containing_token_is_not_a_match() {
        assert!(match_variant("140456").is_none());
        assert!(match_variant("x14045").is_none());
        assert!(match_variant("14045 14046").is_none());
    }

    #[test]
    fn empty_or_unknown_code_rejected() {
        assert!(match_variant("").is_none());
        assert!(match_variant("14048").is_none());
    }

    #[test]
    fn variant_carries_matching_build_strings() {
        let variant = match_variant("14046").expect("14046 is a known code");
        assert_eq!(variant.soft_version, "MSM_14046");
        assert_eq!(
            variant.fingerprint,
            "OPPO/R8200/R1C:4.4.4/KTU84P/1390465867:user/release-keys"
        );
        assert_eq!(
            variant.description,
            "msm8916_32-user 4.4.4 KTU84P eng.root.20150515 release-keys"
        );
    }
}
