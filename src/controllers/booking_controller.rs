use uuid::Uuid;

use crate::dto::booking_dto::{
    BookingDetailResponse, BookingFiltersQuery, BookingListResponse, BookingMutationResponse,
    BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::repositories::booking_repository::BookingFilter;
use crate::services::booking_service::BookingService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct BookingController {
    service: BookingService,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: BookingService::new(
                state.vehicles.clone(),
                state.bookings.clone(),
                state.clock.clone(),
            ),
        }
    }

    pub async fn create(&self, request: CreateBookingRequest) -> AppResult<BookingMutationResponse> {
        let booking = self.service.create_booking(request).await?;
        Ok(BookingMutationResponse {
            message: "Vehículo reservado exitosamente".to_string(),
            booking: booking.into(),
        })
    }

    pub async fn list(&self, filters: BookingFiltersQuery) -> AppResult<BookingListResponse> {
        let filter = BookingFilter {
            vehicle_id: filters.vehicle_id,
            customer_id: filters.customer_id,
            status: filters.status,
        };
        let bookings = self.service.list_bookings(filter).await?;
        Ok(BookingListResponse {
            bookings: bookings.into_iter().map(BookingResponse::from).collect(),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookingDetailResponse> {
        let booking = self.service.get_booking(id).await?;
        Ok(BookingDetailResponse {
            booking: booking.into(),
        })
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> AppResult<BookingMutationResponse> {
        let booking = self.service.update_status(id, request.status).await?;
        Ok(BookingMutationResponse {
            message: format!("Estado de la reserva actualizado a {}", booking.status),
            booking: booking.into(),
        })
    }
}
