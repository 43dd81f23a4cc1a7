// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Flatten a field's type reference such as `[Author!]!` into its base type and two flags.

use async_graphql_parser::types::{BaseType, Type};

/// Chains deeper than this are rejected. Real schemas rarely go beyond two or three levels.
pub const MAX_TYPE_NESTING_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    /// The innermost named type
    pub base_type: String,
    /// Set if any layer is non-null
    pub disallow_null: bool,
    /// Set if any layer is a list
    pub list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeNestingTooDeep {
    pub max_depth: usize,
}

pub fn resolve_type_reference(
    typ: Option<&Type>,
) -> Result<Option<TypeReference>, TypeNestingTooDeep> {
    typ.map(flatten_type).transpose()
}

/// Walk down the wrappers, accumulating the flags. The flags only ever go from `false` to `true`,
/// so the result doesn't depend on where in the chain a modifier appears.
pub fn flatten_type(typ: &Type) -> Result<TypeReference, TypeNestingTooDeep> {
    let mut current = typ;
    let mut disallow_null = false;
    let mut list = false;

    for _ in 0..MAX_TYPE_NESTING_DEPTH {
        disallow_null |= !current.nullable;

        match &current.base {
            BaseType::Named(name) => {
                return Ok(TypeReference {
                    base_type: name.to_string(),
                    disallow_null,
                    list,
                });
            }
            BaseType::List(underlying) => {
                list = true;
                current = underlying.as_ref();
            }
        }
    }

    Err(TypeNestingTooDeep {
        max_depth: MAX_TYPE_NESTING_DEPTH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::first_field;
    use multiplatform_test::multiplatform_test;

    fn flatten_field_type(type_src: &str) -> TypeReference {
        let field = first_field(&format!("type T {{ f: {type_src} }}"));
        flatten_type(&field.ty.node).unwrap()
    }

    fn reference(base_type: &str, disallow_null: bool, list: bool) -> TypeReference {
        TypeReference {
            base_type: base_type.to_string(),
            disallow_null,
            list,
        }
    }

    #[multiplatform_test]
    fn no_type() {
        assert_eq!(resolve_type_reference(None), Ok(None));
    }

    #[multiplatform_test]
    fn named_types() {
        assert_eq!(flatten_field_type("String"), reference("String", false, false));
        assert_eq!(flatten_field_type("String!"), reference("String", true, false));
        assert_eq!(flatten_field_type("Author"), reference("Author", false, false));
    }

    #[multiplatform_test]
    fn list_types() {
        assert_eq!(flatten_field_type("[Int]"), reference("Int", false, true));
        assert_eq!(flatten_field_type("[Int]!"), reference("Int", true, true));
        assert_eq!(flatten_field_type("[Int!]"), reference("Int", true, true));
    }

    #[multiplatform_test]
    fn modifier_position_does_not_matter() {
        let expected = reference("Author", true, true);

        for type_src in ["[Author!]!", "[Author]!", "[Author!]", "[[Author!]!]!", "[[Author]!]"] {
            assert_eq!(flatten_field_type(type_src), expected, "{type_src}");
        }
    }

    #[multiplatform_test]
    fn via_optional_input() {
        let field = first_field("type T { f: [Float!]! }");

        assert_eq!(
            resolve_type_reference(Some(&field.ty.node)),
            Ok(Some(reference("Float", true, true)))
        );
    }

    #[multiplatform_test]
    fn too_deep() {
        let type_src = format!(
            "{}String{}",
            "[".repeat(MAX_TYPE_NESTING_DEPTH),
            "]".repeat(MAX_TYPE_NESTING_DEPTH)
        );
        let field = first_field(&format!("type T {{ f: {type_src} }}"));

        assert_eq!(
            flatten_type(&field.ty.node),
            Err(TypeNestingTooDeep {
                max_depth: MAX_TYPE_NESTING_DEPTH
            })
        );
    }

    #[multiplatform_test]
    fn deepest_allowed() {
        let depth = MAX_TYPE_NESTING_DEPTH - 1;
        let type_src = format!("{}String{}", "[".repeat(depth), "]".repeat(depth));

        assert_eq!(flatten_field_type(&type_src), reference("String", false, true));
    }
}
