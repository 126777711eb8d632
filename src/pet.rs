use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A pet document as stored in the `pets` collection. The id is assigned by
/// the store on insert; a `Pet` built from client input carries `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub species: String,
    pub age: Option<i32>,
}

/// The JSON body accepted by create and replace requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub age: Option<i32>,
}

impl NewPet {
    pub fn into_pet(self, id: Option<ObjectId>) -> Pet {
        Pet {
            id,
            name: self.name,
            species: self.species,
            age: self.age,
        }
    }
}
