// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Add foreign key columns and join tables for association fields, and record a relation for
//! each of them.

use core_model::{
    association::AssociationKind,
    types::{EntityModel, FieldDescriptor, IntermediateSchema},
};
use indexmap::map::Entry;
use storage_model::{
    ColumnReference, ColumnType, RelationLink, StorageColumn, StorageRelation, StorageTable,
};

use crate::{
    error::StorageModelBuildingError,
    naming::{column_name, foreign_key_column_name, join_table_name},
    system_builder::{StorageModelBuilding, add_column},
};

pub(crate) fn build(
    schema: &IntermediateSchema,
    building: &mut StorageModelBuilding,
) -> Result<(), StorageModelBuildingError> {
    for entity in schema.iter() {
        for (field, kind) in entity.association_fields() {
            let link = match kind {
                AssociationKind::BelongsTo => belongs_to(entity, field, building)?,
                AssociationKind::HasOne | AssociationKind::HasMany => {
                    has_one_or_many(schema, entity, field, building)?
                }
                AssociationKind::BelongsToMany => {
                    belongs_to_many(schema, entity, field, building)?
                }
            };

            building.relations.push(StorageRelation {
                entity: entity.name.clone(),
                field: field.name.clone(),
                kind,
                target: field.base_type.clone(),
                link,
            });
        }
    }

    Ok(())
}

// `Book.author`: `books.author_id` referring to `authors.id`
fn belongs_to(
    entity: &EntityModel,
    field: &FieldDescriptor,
    building: &mut StorageModelBuilding,
) -> Result<RelationLink, StorageModelBuildingError> {
    let (foreign_pk_column, typ) = target_pk_column(entity, field, building)?;

    let self_column = add_entity_column(
        building,
        &entity.name,
        foreign_key_column(&field.name, typ, field.nullable, foreign_pk_column.clone()),
        || unknown_entity(entity, field, &entity.name),
    )?;

    Ok(RelationLink::ManyToOne {
        self_column,
        foreign_pk_column,
    })
}

// `Author.books`: `books.author_id` referring to `authors.id`
fn has_one_or_many(
    schema: &IntermediateSchema,
    entity: &EntityModel,
    field: &FieldDescriptor,
    building: &mut StorageModelBuilding,
) -> Result<RelationLink, StorageModelBuildingError> {
    let (self_pk_column, typ) = building
        .pk_column(&entity.name)
        .ok_or_else(|| unknown_entity(entity, field, &entity.name))?;

    let column_base_name = one_to_many_column_base_name(schema, entity, field)?;

    let foreign_column = add_entity_column(
        building,
        &field.base_type,
        foreign_key_column(&column_base_name, typ, true, self_pk_column.clone()),
        || unknown_entity(entity, field, &field.base_type),
    )?;

    Ok(RelationLink::OneToMany {
        self_pk_column,
        foreign_column,
    })
}

/// The name (without the `_id` suffix) of the target's column referring back to the entity:
/// - the column of the target's `belongsTo` to the entity, if there is exactly one
/// - `author` for `Author.books`, if that is the only `hasOne`/`hasMany` from `Author` to `Book`
/// - `author_edited_books` for `Author.editedBooks`, if there are several and the target declares
///   no `belongsTo` to pair them with
fn one_to_many_column_base_name(
    schema: &IntermediateSchema,
    entity: &EntityModel,
    field: &FieldDescriptor,
) -> Result<String, StorageModelBuildingError> {
    let siblings = associations_to(
        entity,
        &field.base_type,
        &[AssociationKind::HasOne, AssociationKind::HasMany],
    );
    let inverses = inverse_associations(schema, entity, field, AssociationKind::BelongsTo);

    match (siblings, inverses.as_slice()) {
        (1, [inverse]) => Ok(inverse.name.clone()),
        (1, []) => Ok(entity.name.clone()),
        (_, []) => Ok(format!("{}_{}", entity.name, field.name)),
        _ => Err(ambiguous_association(entity, field)),
    }
}

// `Book.tags`: `books_tags(book_id, tag_id)`. Both sides of the pair share the join table. If an
// entity has several `belongsToMany` to the same target (`Book.authors`, `Book.editors`), each gets
// its own join table named after the field (`books_authors`, `books_editors`).
fn belongs_to_many(
    schema: &IntermediateSchema,
    entity: &EntityModel,
    field: &FieldDescriptor,
    building: &mut StorageModelBuilding,
) -> Result<RelationLink, StorageModelBuildingError> {
    let (self_pk_column, self_typ) = building
        .pk_column(&entity.name)
        .ok_or_else(|| unknown_entity(entity, field, &entity.name))?;
    let (foreign_pk_column, foreign_typ) = target_pk_column(entity, field, building)?;

    let is_self_reference = field.base_type == entity.name;
    let siblings = associations_to(entity, &field.base_type, &[AssociationKind::BelongsToMany]);

    let shared = if is_self_reference {
        siblings == 1
    } else {
        let inverses =
            inverse_associations(schema, entity, field, AssociationKind::BelongsToMany).len();

        match (siblings, inverses) {
            (1, 0 | 1) => true,
            (_, 0) => false,
            _ => return Err(ambiguous_association(entity, field)),
        }
    };

    let join_table_name = if shared {
        join_table_name(&self_pk_column.table, &foreign_pk_column.table)
    } else {
        format!("{}_{}", self_pk_column.table, column_name(&field.name))
    };

    // Self-referencing associations (`Person.friends`) would otherwise get two `person_id`
    // columns
    let foreign_column_name = if is_self_reference {
        &field.name
    } else {
        &field.base_type
    };

    let join_table = match building.tables.entry(join_table_name.clone()) {
        // Only a shared join table may already exist (created by the other side)
        Entry::Occupied(entry) if shared && entry.get().is_join_table() => entry.into_mut(),
        Entry::Occupied(_) => {
            return Err(StorageModelBuildingError::DuplicateTable {
                table: join_table_name,
            });
        }
        Entry::Vacant(entry) => entry.insert(StorageTable {
            name: join_table_name.clone(),
            entity: None,
            columns: vec![],
        }),
    };

    let self_column = add_column(
        join_table,
        join_column(&entity.name, self_typ, self_pk_column),
    )?;
    let foreign_column = add_column(
        join_table,
        join_column(foreign_column_name, foreign_typ, foreign_pk_column),
    )?;

    Ok(RelationLink::ManyToMany {
        join_table: join_table_name,
        self_column,
        foreign_column,
    })
}

/// Number of associations (including `field` itself) from `entity` to `target` of the given kinds
fn associations_to(entity: &EntityModel, target: &str, kinds: &[AssociationKind]) -> usize {
    entity
        .association_fields()
        .filter(|(field, kind)| field.base_type == target && kinds.contains(kind))
        .count()
}

/// The target's associations of `kind` pointing back at `entity`
fn inverse_associations<'a>(
    schema: &'a IntermediateSchema,
    entity: &EntityModel,
    field: &FieldDescriptor,
    kind: AssociationKind,
) -> Vec<&'a FieldDescriptor> {
    schema
        .get(&field.base_type)
        .map(|target| {
            target
                .association_fields()
                .filter(|(inverse, inverse_kind)| {
                    inverse.base_type == entity.name && *inverse_kind == kind
                })
                .map(|(inverse, _)| inverse)
                .collect()
        })
        .unwrap_or_default()
}

fn target_pk_column(
    entity: &EntityModel,
    field: &FieldDescriptor,
    building: &StorageModelBuilding,
) -> Result<(ColumnReference, ColumnType), StorageModelBuildingError> {
    building
        .pk_column(&field.base_type)
        .ok_or_else(|| unknown_entity(entity, field, &field.base_type))
}

fn add_entity_column(
    building: &mut StorageModelBuilding,
    entity_name: &str,
    column: StorageColumn,
    unknown: impl FnOnce() -> StorageModelBuildingError,
) -> Result<ColumnReference, StorageModelBuildingError> {
    let table = building.entity_table_mut(entity_name).ok_or_else(unknown)?;
    add_column(table, column)
}

fn foreign_key_column(
    name: &str,
    typ: ColumnType,
    is_nullable: bool,
    references: ColumnReference,
) -> StorageColumn {
    StorageColumn {
        name: foreign_key_column_name(name),
        typ,
        is_pk: false,
        is_auto_increment: false,
        is_nullable,
        references: Some(references),
    }
}

fn join_column(name: &str, typ: ColumnType, references: ColumnReference) -> StorageColumn {
    StorageColumn {
        is_pk: true,
        is_nullable: false,
        ..foreign_key_column(name, typ, false, references)
    }
}

fn ambiguous_association(
    entity: &EntityModel,
    field: &FieldDescriptor,
) -> StorageModelBuildingError {
    StorageModelBuildingError::AmbiguousAssociation {
        entity: entity.name.clone(),
        field: field.name.clone(),
        target: field.base_type.clone(),
    }
}

fn unknown_entity(
    entity: &EntityModel,
    field: &FieldDescriptor,
    target: &str,
) -> StorageModelBuildingError {
    StorageModelBuildingError::UnknownEntity {
        entity: entity.name.clone(),
        field: field.name.clone(),
        target: target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use core_model::{
        association::AssociationKind,
        types::{EntityModel, FieldDescriptor, IntermediateSchema},
    };
    use multiplatform_test::multiplatform_test;
    use storage_model::{ColumnReference, RelationLink, StorageModel};

    use crate::{build, error::StorageModelBuildingError, test_util::build_from_src};

    fn reference(table: &str, column: &str) -> ColumnReference {
        ColumnReference {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    fn column_names(model: &StorageModel, table: &str) -> Vec<String> {
        model
            .table(table)
            .unwrap()
            .columns
            .iter()
            .map(|column| column.name.clone())
            .collect()
    }

    #[multiplatform_test]
    fn association_to_unknown_entity() {
        // The translator never produces this, but a hand-built model may
        let author = FieldDescriptor {
            name: "author".to_string(),
            base_type: "Author".to_string(),
            nullable: true,
            is_list: false,
            association: Some(AssociationKind::BelongsTo),
        };
        let schema: IntermediateSchema = [EntityModel {
            name: "Book".to_string(),
            plural_name: "Books".to_string(),
            fields: [(author.name.clone(), author)].into_iter().collect(),
        }]
        .into_iter()
        .collect();

        assert_eq!(
            build(&schema).unwrap_err(),
            StorageModelBuildingError::UnknownEntity {
                entity: "Book".to_string(),
                field: "author".to_string(),
                target: "Author".to_string(),
            }
        );
    }

    #[multiplatform_test]
    fn several_belongs_to_many_to_the_same_target() {
        let model = build_from_src(
            r#"
            type Book {
              id: ID!
              authors: [Author] @belongsToMany
              editors: [Author] @belongsToMany
            }

            type Author {
              id: ID!
            }
            "#,
        )
        .unwrap();

        assert_eq!(
            model.relation("Book", "authors").unwrap().link,
            RelationLink::ManyToMany {
                join_table: "books_authors".to_string(),
                self_column: reference("books_authors", "book_id"),
                foreign_column: reference("books_authors", "author_id"),
            }
        );
        assert_eq!(
            model.relation("Book", "editors").unwrap().link,
            RelationLink::ManyToMany {
                join_table: "books_editors".to_string(),
                self_column: reference("books_editors", "book_id"),
                foreign_column: reference("books_editors", "author_id"),
            }
        );
        assert!(model.table("authors_books").is_none());
    }

    #[multiplatform_test]
    fn several_self_referencing_belongs_to_many() {
        let model = build_from_src(
            r#"
            type Person {
              id: ID!
              friends: [Person] @belongsToMany
              blocked: [Person] @belongsToMany
            }
            "#,
        )
        .unwrap();

        assert_eq!(
            column_names(&model, "people_friends"),
            vec!["person_id", "friends_id"]
        );
        assert_eq!(
            column_names(&model, "people_blocked"),
            vec!["person_id", "blocked_id"]
        );
        assert!(model.table("people_people").is_none());
    }

    #[multiplatform_test]
    fn unpaired_belongs_to_many() {
        let err = build_from_src(
            r#"
            type Book {
              id: ID!
              authors: [Author] @belongsToMany
              editors: [Author] @belongsToMany
            }

            type Author {
              id: ID!
              books: [Book] @belongsToMany
            }
            "#,
        )
        .unwrap_err();

        insta::assert_snapshot!(
            err.to_string(),
            @"Book.authors: cannot tell which association of 'Author' is the other side of this one"
        );
    }

    #[multiplatform_test]
    fn several_has_many_to_the_same_target() {
        let model = build_from_src(
            r#"
            type Author {
              id: ID!
              books: [Book] @hasMany
              editedBooks: [Book] @hasMany
            }

            type Book {
              id: ID!
            }
            "#,
        )
        .unwrap();

        assert_eq!(
            column_names(&model, "books"),
            vec!["id", "author_books_id", "author_edited_books_id"]
        );
        assert_eq!(
            model.relation("Author", "editedBooks").unwrap().link,
            RelationLink::OneToMany {
                self_pk_column: reference("authors", "id"),
                foreign_column: reference("books", "author_edited_books_id"),
            }
        );
    }

    #[multiplatform_test]
    fn has_many_pairs_with_differently_named_belongs_to() {
        let model = build_from_src(
            r#"
            type Author {
              id: ID!
              books: [Book] @hasMany
            }

            type Book {
              id: ID!
              writer: Author! @belongsTo
            }
            "#,
        )
        .unwrap();

        assert_eq!(column_names(&model, "books"), vec!["id", "writer_id"]);
        assert!(!model.table("books").unwrap().column("writer_id").unwrap().is_nullable);
        assert_eq!(
            model.relation("Author", "books").unwrap().link,
            RelationLink::OneToMany {
                self_pk_column: reference("authors", "id"),
                foreign_column: reference("books", "writer_id"),
            }
        );
    }

    #[multiplatform_test]
    fn unpaired_has_many() {
        let err = build_from_src(
            r#"
            type Author {
              id: ID!
              books: [Book] @hasMany
            }

            type Book {
              id: ID!
              author: Author @belongsTo
              editor: Author @belongsTo
            }
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            StorageModelBuildingError::AmbiguousAssociation {
                entity: "Author".to_string(),
                field: "books".to_string(),
                target: "Book".to_string(),
            }
        );
    }
}
