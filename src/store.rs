use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndReplaceOptions, ReturnDocument},
    Client, Collection,
};
use secrecy::ExposeSecret;

use crate::{
    configuration::DatabaseSettings,
    pet::{NewPet, Pet},
};

#[derive(Debug)]
pub enum StoreError {
    Database(mongodb::error::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Database(e)
    }
}

/// Persistence seam for the pet resource. The store assigns document ids on
/// insert; handlers never see the driver types behind it.
#[async_trait]
pub trait PetStore: Send + Sync {
    async fn insert(&self, new_pet: NewPet) -> Result<Pet, StoreError>;
    async fn list(&self) -> Result<Vec<Pet>, StoreError>;
    async fn get(&self, pet_id: ObjectId) -> Result<Option<Pet>, StoreError>;
    async fn replace(&self, pet_id: ObjectId, new_pet: NewPet) -> Result<Option<Pet>, StoreError>;
    async fn delete(&self, pet_id: ObjectId) -> Result<bool, StoreError>;
}

pub struct MongoPetStore {
    collection: Collection<Pet>,
}

impl MongoPetStore {
    /// Connects using the configured connection string and pings the
    /// database, so an unreachable store fails the startup sequence instead
    /// of the first request.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(settings.connection_string().expose_secret()).await?;
        let database = client.database(&settings.db_name);
        database.run_command(doc! { "ping": 1 }, None).await?;

        Ok(Self {
            collection: database.collection("pets"),
        })
    }
}

#[async_trait]
impl PetStore for MongoPetStore {
    async fn insert(&self, new_pet: NewPet) -> Result<Pet, StoreError> {
        let mut pet = new_pet.into_pet(None);
        let result = self.collection.insert_one(&pet, None).await?;
        pet.id = result.inserted_id.as_object_id();
        Ok(pet)
    }

    async fn list(&self) -> Result<Vec<Pet>, StoreError> {
        let cursor = self.collection.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get(&self, pet_id: ObjectId) -> Result<Option<Pet>, StoreError> {
        Ok(self.collection.find_one(doc! { "_id": pet_id }, None).await?)
    }

    async fn replace(&self, pet_id: ObjectId, new_pet: NewPet) -> Result<Option<Pet>, StoreError> {
        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .collection
            .find_one_and_replace(doc! { "_id": pet_id }, new_pet.into_pet(Some(pet_id)), options)
            .await?)
    }

    async fn delete(&self, pet_id: ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": pet_id }, None).await?;
        Ok(result.deleted_count > 0)
    }
}
