use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book row. The title is unique across the whole catalog.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub title: String,
    pub author: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Data for inserting a new book. The id is assigned by the storage layer.
#[derive(Debug)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
}

/// Partial update of a book. Only the supplied fields are written.
#[derive(Debug, Default, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

/// A bounded slice of the catalog, ordered by title.
pub async fn list_page(
    db: &DatabaseConnection,
    limit: u64,
    offset: u64,
    order: Order,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .order_by(Column::Title, order)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

pub async fn find_by_title(db: &DatabaseConnection, title: &str) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::Title.eq(title))
        .one(db)
        .await
}

/// Inserts a new book and returns the row with its assigned id.
///
/// Fails if the title collides with an existing row.
pub async fn create(db: &DatabaseConnection, new_book: NewBook) -> Result<Model, DbErr> {
    let book = ActiveModel {
        title: Set(new_book.title),
        author: Set(new_book.author),
        description: Set(new_book.description),
        ..Default::default()
    };

    book.insert(db).await
}

/// Updates only the supplied fields on the row matching `id` and returns the
/// updated row. Uniqueness violations propagate as [`DbErr`].
pub async fn update(db: &DatabaseConnection, id: i64, update: BookUpdate) -> Result<Model, DbErr> {
    let mut book = ActiveModel {
        id: Set(id),
        ..Default::default()
    };

    if let Some(title) = update.title {
        book.title = Set(title);
    }
    if let Some(author) = update.author {
        book.author = Set(author);
    }
    if let Some(description) = update.description {
        book.description = Set(description);
    }

    book.update(db).await
}

/// Removes the row matching the book's id.
pub async fn delete(db: &DatabaseConnection, book: Model) -> Result<(), DbErr> {
    book.delete(db).await?;

    Ok(())
}
