use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::category::{Category, CategoryDraft, OperationReply};
use crate::domain::types::CategoryId;
use crate::dto::categories::{CategoryDto, NewCategoryDto, ReplyDto};
use crate::repository::{ApiError, ApiResult, CategoryReader, CategoryWriter, RestRepository};

#[async_trait]
impl CategoryReader for RestRepository {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let items: Vec<CategoryDto> = decode(response).await?;
        Ok(items.into_iter().map(Category::from).collect())
    }

    async fn search_categories(&self, name: &str) -> ApiResult<Vec<Category>> {
        let url = format!("{}/listaCategoriaPorNombreLike/{name}", self.base_url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let items: Vec<CategoryDto> = decode(response).await?;
        Ok(items.into_iter().map(Category::from).collect())
    }
}

#[async_trait]
impl CategoryWriter for RestRepository {
    async fn create_category(&self, draft: &CategoryDraft) -> ApiResult<OperationReply> {
        let url = format!("{}/registraCategoria", self.base_url);
        let response = self
            .client
            .post(url)
            .json(&NewCategoryDto::from(draft))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let reply: ReplyDto = decode(response).await?;
        Ok(reply.into())
    }

    async fn update_category(&self, category: &Category) -> ApiResult<OperationReply> {
        let url = format!("{}/actualizaCategoria", self.base_url);
        let response = self
            .client
            .put(url)
            .json(&CategoryDto::from(category))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let reply: ReplyDto = decode(response).await?;
        Ok(reply.into())
    }

    async fn delete_category(&self, id: CategoryId) -> ApiResult<OperationReply> {
        let url = format!("{}/eliminaCategoria/{id}", self.base_url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let reply: ReplyDto = decode(response).await?;
        Ok(reply.into())
    }
}

/// Reject non-success statuses before touching the body.
async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Decode a successful response body as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(map_reqwest_error)
}

/// Map a `reqwest` failure onto the error tier it belongs to.
fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else {
        ApiError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::RestRepository;

    #[test]
    fn base_url_drops_trailing_slashes() {
        let repo = RestRepository::new("http://localhost:8090/url/categoria/");
        assert_eq!(repo.base_url(), "http://localhost:8090/url/categoria");
    }

    #[test]
    fn base_url_is_kept_verbatim_otherwise() {
        let repo = RestRepository::new("http://intranet.local/url/categoria");
        assert_eq!(repo.base_url(), "http://intranet.local/url/categoria");
    }
}
