use mongodb::bson::doc;
use mongodb::{Client, Collection};
use studiodesk_types::taxonomy;

use crate::error::Result;
use crate::models::{CategoryRecord, StudioRecord};

/// Read access to `categories` and `studios`, plus first-run seeding
#[derive(Clone)]
pub struct MongoReferenceRepository {
    categories: Collection<CategoryRecord>,
    studios: Collection<StudioRecord>,
}

impl MongoReferenceRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let database = client.database(db_name);
        Self {
            categories: database.collection("categories"),
            studios: database.collection("studios"),
        }
    }

    pub async fn find_category_by_name(&self, name: &str) -> Result<Option<CategoryRecord>> {
        Ok(self.categories.find_one(doc! { "name": name }).await?)
    }

    pub async fn first_studio(&self) -> Result<Option<StudioRecord>> {
        Ok(self.studios.find_one(doc! {}).await?)
    }

    /// Copy the taxonomy registry into empty reference collections
    pub async fn seed_if_empty(&self) -> Result<()> {
        if self.categories.count_documents(doc! {}).await? == 0 {
            let rows: Vec<CategoryRecord> = taxonomy::CATEGORIES.iter().map(CategoryRecord::from).collect();
            self.categories.insert_many(rows).await?;
            tracing::info!(count = taxonomy::CATEGORIES.len(), "Seeded categories");
        }

        if self.studios.count_documents(doc! {}).await? == 0 {
            let rows: Vec<StudioRecord> = taxonomy::STUDIOS.iter().map(StudioRecord::from).collect();
            self.studios.insert_many(rows).await?;
            tracing::info!(count = taxonomy::STUDIOS.len(), "Seeded studios");
        }

        Ok(())
    }
}
