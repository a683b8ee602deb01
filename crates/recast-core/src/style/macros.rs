//! Macro support for declaring style bundles.

/// Declare a style struct whose fields are all optional, with an accessor per
/// field that supplies the hard default, and a field-wise `merge` where the
/// later bundle's explicit values win.
///
/// ```ignore
/// style_fields! {
///     /// Blank line policy.
///     pub struct BlankLinesStyle {
///         keep_maximum_in_code: u32 = 2,
///     }
/// }
/// ```
macro_rules! style_fields {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "kebab-case")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> $ty {
                    self.$field.clone().unwrap_or($default)
                }
            )*

            /// Field-wise merge; fields set explicitly in `later` win.
            pub fn merge(&self, later: &Self) -> Self {
                Self {
                    $(
                        $field: later.$field.clone().or_else(|| self.$field.clone()),
                    )*
                }
            }
        }
    };
}
