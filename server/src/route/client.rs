use application::service::{GetLoyaltyPointsService, PurchaseService};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{ClientTransformer, GetLoyaltyPointsRequest, PurchaseRequest};
use crate::response::ClientPresenter;

pub trait ClientRouter {
    fn route_client(self) -> Self;
}

impl ClientRouter for Router<AppModule> {
    fn route_client(self) -> Self {
        self.route(
            "/bookstore/clients/:id/loyalty",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(ClientTransformer, ClientPresenter)
                        .intake(GetLoyaltyPointsRequest::new(id))
                        .handle(|dto| async move { module.pgpool().get_loyalty_points(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookstore/clients/:id/purchase",
            post(
                |State(module): State<AppModule>,
                 Path(id): Path<i64>,
                 Json(req): Json<PurchaseRequest>| async move {
                    Controller::new(ClientTransformer, ClientPresenter)
                        .try_intake((id, req))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| async move { module.pgpool().purchase(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
