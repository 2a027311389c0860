use crate::api::poetry::error::PoetryError;
use crate::api::poetry::interfaces::CreatePoem;
use crate::database::PoemStore;
use crate::database::tables::poem::Poem;
use rotation::shuffle_in_place;
use sqlx::PgPool;
use uuid::Uuid;

/// Poems in a fresh shuffled order, re-rolled per request so the display
/// never always opens on the same poem.
pub async fn list_shuffled(pool: &PgPool) -> Result<Vec<Poem>, PoetryError> {
    let mut poems = PoemStore::list(pool).await?;
    shuffle_in_place(&mut poems);
    Ok(poems)
}

pub async fn add_poem(pool: &PgPool, payload: &CreatePoem) -> Result<Poem, PoetryError> {
    let title = payload.title.trim();
    let content = payload.content.trim();
    if content.is_empty() {
        return Err(PoetryError::Validation("Poem content cannot be empty.".into()));
    }
    let title = if title.is_empty() { "Sem Título" } else { title };
    Ok(PoemStore::create(pool, title, content).await?)
}

pub async fn delete_poem(pool: &PgPool, id: Uuid) -> Result<(), PoetryError> {
    if PoemStore::delete(pool, id).await? {
        Ok(())
    } else {
        Err(PoetryError::PoemNotFound(id))
    }
}
