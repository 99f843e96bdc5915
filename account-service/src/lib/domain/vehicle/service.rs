use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::customer::models::CustomerId;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::AddVehicleCommand;
use crate::domain::vehicle::models::NewVehicle;
use crate::domain::vehicle::models::UpdateVehicleCommand;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::Vin;
use crate::domain::vehicle::ports::VehicleRepository;
use crate::domain::vehicle::ports::VehicleServicePort;

/// Domain service implementation for vehicle operations.
pub struct VehicleService<VR, CR>
where
    VR: VehicleRepository,
    CR: CustomerRepository,
{
    repository: Arc<VR>,
    customers: Arc<CR>,
}

impl<VR, CR> VehicleService<VR, CR>
where
    VR: VehicleRepository,
    CR: CustomerRepository,
{
    /// Create a new vehicle service; the customer store answers ownership checks.
    pub fn new(repository: Arc<VR>, customers: Arc<CR>) -> Self {
        Self {
            repository,
            customers,
        }
    }

    async fn load(&self, id: &VehicleId) -> Result<Vehicle, VehicleError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(VehicleError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<VR, CR> VehicleServicePort for VehicleService<VR, CR>
where
    VR: VehicleRepository,
    CR: CustomerRepository,
{
    async fn add_vehicle(
        &self,
        owner: &CustomerId,
        command: AddVehicleCommand,
    ) -> Result<Vehicle, VehicleError> {
        let owner_exists = self
            .customers
            .find_by_id(owner)
            .await
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?
            .is_some();
        if !owner_exists {
            tracing::warn!(customer_id = %owner, "Vehicle added for unknown customer");
            return Err(VehicleError::OwnerNotFound(owner.to_string()));
        }

        if self.repository.exists_active_plate(&command.plate_no).await? {
            return Err(VehicleError::PlateAlreadyExists(command.plate_no.to_string()));
        }
        if self.repository.exists_vin(&command.vin).await? {
            return Err(VehicleError::VinAlreadyExists(command.vin.to_string()));
        }

        let vehicle = NewVehicle {
            customer_id: *owner,
            brand: command.brand,
            model: command.model,
            registered_at: command.registered_at,
            vin: command.vin,
            plate_no: command.plate_no,
            fuel: command.fuel,
            color: command.color,
            mileage: command.mileage,
            transmission_type: command.transmission_type,
            tire_size: command.tire_size,
            last_serviced: command.last_serviced,
            created_at: Utc::now(),
        };

        let created = self.repository.create(vehicle).await?;
        tracing::info!(
            vehicle_id = %created.id,
            customer_id = %created.customer_id,
            plate_no = %created.plate_no,
            "Vehicle registered"
        );

        Ok(created)
    }

    async fn get_vehicle(&self, id: &VehicleId) -> Result<Vehicle, VehicleError> {
        self.load(id).await
    }

    async fn get_vehicle_by_vin(&self, vin: &Vin) -> Result<Vehicle, VehicleError> {
        self.repository
            .find_by_vin(vin)
            .await?
            .ok_or(VehicleError::NotFoundByVin(vin.to_string()))
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleError> {
        self.repository.list_all().await
    }

    async fn list_customer_vehicles(
        &self,
        owner: &CustomerId,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        let vehicles = self.repository.list_active_by_customer(owner).await?;
        tracing::debug!(customer_id = %owner, count = vehicles.len(), "Listed active vehicles");
        Ok(vehicles)
    }

    async fn update_vehicle(
        &self,
        id: &VehicleId,
        command: UpdateVehicleCommand,
    ) -> Result<Vehicle, VehicleError> {
        let mut vehicle = self.load(id).await?;

        if let Some(vin) = command.vin {
            if vin != vehicle.vin && self.repository.exists_vin(&vin).await? {
                return Err(VehicleError::VinAlreadyExists(vin.to_string()));
            }
            vehicle.vin = vin;
        }
        if let Some(plate_no) = command.plate_no {
            if plate_no != vehicle.plate_no && self.repository.exists_active_plate(&plate_no).await?
            {
                return Err(VehicleError::PlateAlreadyExists(plate_no.to_string()));
            }
            vehicle.plate_no = plate_no;
        }

        if let Some(brand) = command.brand {
            vehicle.brand = brand;
        }
        if let Some(model) = command.model {
            vehicle.model = model;
        }
        if let Some(registered_at) = command.registered_at {
            vehicle.registered_at = registered_at;
        }
        if command.fuel.is_some() {
            vehicle.fuel = command.fuel;
        }
        if command.color.is_some() {
            vehicle.color = command.color;
        }
        if command.mileage.is_some() {
            vehicle.mileage = command.mileage;
        }
        if command.transmission_type.is_some() {
            vehicle.transmission_type = command.transmission_type;
        }
        if command.tire_size.is_some() {
            vehicle.tire_size = command.tire_size;
        }
        if command.last_serviced.is_some() {
            vehicle.last_serviced = command.last_serviced;
        }

        let updated = self.repository.update(vehicle).await?;
        tracing::info!(vehicle_id = %updated.id, "Vehicle updated");

        Ok(updated)
    }

    async fn mark_deleted(&self, id: &VehicleId) -> Result<Vehicle, VehicleError> {
        let mut vehicle = self.load(id).await?;
        if vehicle.deleted {
            return Ok(vehicle);
        }

        vehicle.deleted = true;
        let deleted = self.repository.update(vehicle).await?;
        tracing::info!(vehicle_id = %deleted.id, "Vehicle marked as deleted");

        Ok(deleted)
    }

    async fn count_vehicles(&self) -> Result<i64, VehicleError> {
        self.repository.count_all().await
    }
}
