pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use bookshelf_http::error::AppError;
use bookshelf_kernel::{InitCtx, Module};
use bookshelf_lookup::BookLookup;
use bookshelf_store::{Book, CatalogStore};

use service::{CatalogError, CatalogService};

/// Catalog module: book listing plus enrichment from the remote provider
pub struct CatalogModule {
    service: Arc<CatalogService>,
}

impl CatalogModule {
    pub fn new(store: Arc<dyn CatalogStore>, lookup: Arc<dyn BookLookup>) -> Self {
        Self {
            service: Arc::new(CatalogService::new(store, lookup)),
        }
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            lookup = %ctx.settings.lookup.base_url,
            "catalog module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_books))
            .route("/{volume_id}", post(add_book))
            .route("/health", get(health_check))
            .with_state(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All catalog records in insertion order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Book"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{volume_id}": {
                    "post": {
                        "summary": "Add a book from the remote provider",
                        "tags": ["Books"],
                        "parameters": [
                            {
                                "name": "volume_id",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "string"
                                },
                                "description": "External volume identifier"
                            }
                        ],
                        "responses": {
                            "201": {
                                "description": "Created record",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Book"
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Invalid external Book ID",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            },
                            "502": {
                                "description": "Remote provider failure",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": {
                                        "schema": {
                                            "type": "string"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "description": "External volume identifier"
                            },
                            "title": {
                                "type": "string",
                                "description": "Title of the book"
                            },
                            "author": {
                                "type": "string",
                                "nullable": true,
                                "description": "First listed author, if any"
                            },
                            "pageCount": {
                                "type": "integer",
                                "nullable": true,
                                "description": "Page count, if known"
                            }
                        },
                        "required": ["id", "title"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "catalog module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}

/// List catalog records in insertion order
async fn list_books(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = service.list().await.map_err(into_app_error)?;
    Ok(Json(books))
}

/// Create a catalog record from the remote provider's metadata
async fn add_book(
    State(service): State<Arc<CatalogService>>,
    Path(volume_id): Path<String>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book = service
        .add_from_lookup(&volume_id)
        .await
        .map_err(into_app_error)?;
    Ok((StatusCode::CREATED, Json(book)))
}

fn into_app_error(err: CatalogError) -> AppError {
    match err {
        CatalogError::InvalidVolumeId => AppError::bad_request("Invalid external Book ID"),
        CatalogError::Lookup(err) => AppError::bad_gateway(err.to_string()),
        CatalogError::Store(err) => AppError::Internal(err.into()),
    }
}

/// Create a new instance of the catalog module
pub fn create_module(
    store: Arc<dyn CatalogStore>,
    lookup: Arc<dyn BookLookup>,
) -> Arc<dyn Module> {
    Arc::new(CatalogModule::new(store, lookup))
}
