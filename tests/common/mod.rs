//! Shared test fixture: an in-memory implementation of every repository
//! port, wired through the real router so tests exercise the full HTTP
//! surface without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fitopia_backoffice::adapters::http::{api_router, AppState};
use fitopia_backoffice::domain::attendance::CheckInRecord;
use fitopia_backoffice::domain::billing::{
    total_amount, Discount, TransactionDraft, TransactionPatch, TransactionRecord,
};
use fitopia_backoffice::domain::catalog::{Product, ProductPatch};
use fitopia_backoffice::domain::foundation::{
    ContactNumber, DomainError, ErrorCode, ItemCode, Timestamp,
};
use fitopia_backoffice::domain::member::{Member, MemberPatch, MemberPhoto};
use fitopia_backoffice::domain::membership::{
    MembershipPlan, MembershipStatus, PlanPatch, StatusPatch, StatusPeriod,
};
use fitopia_backoffice::ports::{
    CheckInRepository, MemberPhotoRepository, MemberRepository, MembershipPlanRepository,
    MembershipStatusRepository, ProductRepository, TransactionRepository,
};

/// All tables of the back office, held in memory.
#[derive(Default)]
pub struct InMemoryBackOffice {
    pub members: Mutex<Vec<Member>>,
    pub photos: Mutex<Vec<MemberPhoto>>,
    pub statuses: Mutex<Vec<MembershipStatus>>,
    pub products: Mutex<Vec<Product>>,
    pub plans: Mutex<Vec<MembershipPlan>>,
    pub check_ins: Mutex<Vec<CheckInRecord>>,
    pub transactions: Mutex<Vec<TransactionRecord>>,
}

impl InMemoryBackOffice {
    fn member_exists(&self, contact: &ContactNumber) -> bool {
        self.members
            .lock()
            .unwrap()
            .iter()
            .any(|m| &m.contact_number == contact)
    }

    fn item_exists(&self, code: &ItemCode) -> bool {
        self.products
            .lock()
            .unwrap()
            .iter()
            .any(|p| &p.item_code == code)
            || self
                .plans
                .lock()
                .unwrap()
                .iter()
                .any(|p| &p.item_code == code)
    }
}

fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}

struct Members(Arc<InMemoryBackOffice>);

#[async_trait]
impl MemberRepository for Members {
    async fn create(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.0.members.lock().unwrap();
        if members
            .iter()
            .any(|m| m.contact_number == member.contact_number)
        {
            return Err(DomainError::new(
                ErrorCode::MemberExists,
                "Member already exists",
            ));
        }
        members.push(member.clone());
        Ok(())
    }

    async fn find(&self, contact: &ContactNumber) -> Result<Option<Member>, DomainError> {
        Ok(self
            .0
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.contact_number == contact)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.0.members.lock().unwrap().clone())
    }

    async fn update(
        &self,
        contact: &ContactNumber,
        patch: &MemberPatch,
    ) -> Result<(), DomainError> {
        let mut members = self.0.members.lock().unwrap();
        let member = members
            .iter_mut()
            .find(|m| &m.contact_number == contact)
            .ok_or_else(|| DomainError::new(ErrorCode::MemberNotFound, "Member not found"))?;
        if let Some(name) = &patch.name {
            member.name = name.clone();
        }
        if let Some(email) = &patch.email {
            member.email = email.clone();
        }
        if let Some(dob) = patch.date_of_birth {
            member.date_of_birth = dob;
        }
        if let Some(name) = &patch.emergency_name {
            member.emergency_name = name.clone();
        }
        if let Some(number) = &patch.emergency_number {
            member.emergency_number = number.clone();
        }
        if let Some(balance) = patch.balance {
            member.balance = balance;
        }
        if let Some(points) = patch.reward_points {
            member.reward_points = points;
        }
        Ok(())
    }

    async fn delete(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let mut members = self.0.members.lock().unwrap();
        let before = members.len();
        members.retain(|m| &m.contact_number != contact);
        if members.len() == before {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            ));
        }
        // Mirror the schema's cascade rules.
        self.0
            .statuses
            .lock()
            .unwrap()
            .retain(|s| &s.contact_number != contact);
        self.0
            .check_ins
            .lock()
            .unwrap()
            .retain(|c| &c.contact_number != contact);
        self.0
            .transactions
            .lock()
            .unwrap()
            .retain(|t| &t.contact_number != contact);
        self.0
            .photos
            .lock()
            .unwrap()
            .retain(|p| &p.contact_number != contact);
        Ok(())
    }
}

struct Photos(Arc<InMemoryBackOffice>);

#[async_trait]
impl MemberPhotoRepository for Photos {
    async fn store(&self, photo: &MemberPhoto) -> Result<(), DomainError> {
        if !self.0.member_exists(&photo.contact_number) {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }
        let mut photos = self.0.photos.lock().unwrap();
        for existing in photos.iter_mut() {
            if existing.contact_number == photo.contact_number {
                existing.is_active = false;
            }
        }
        photos.push(photo.clone());
        Ok(())
    }

    async fn find_active(
        &self,
        contact: &ContactNumber,
    ) -> Result<Option<MemberPhoto>, DomainError> {
        Ok(self
            .0
            .photos
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.contact_number == contact && p.is_active)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<MemberPhoto>, DomainError> {
        Ok(self.0.photos.lock().unwrap().clone())
    }

    async fn replace_active(
        &self,
        contact: &ContactNumber,
        image: &[u8],
    ) -> Result<(), DomainError> {
        let mut photos = self.0.photos.lock().unwrap();
        let photo = photos
            .iter_mut()
            .find(|p| &p.contact_number == contact && p.is_active)
            .ok_or_else(|| DomainError::new(ErrorCode::PhotoNotFound, "Member photo not found"))?;
        photo.image = image.to_vec();
        Ok(())
    }

    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let mut photos = self.0.photos.lock().unwrap();
        let before = photos.len();
        photos.retain(|p| &p.contact_number != contact);
        if photos.len() == before {
            return Err(DomainError::new(
                ErrorCode::PhotoNotFound,
                "Member photo not found",
            ));
        }
        Ok(())
    }
}

struct Statuses(Arc<InMemoryBackOffice>);

#[async_trait]
impl MembershipStatusRepository for Statuses {
    async fn open(
        &self,
        contact: &ContactNumber,
        period: StatusPeriod,
        is_active: bool,
    ) -> Result<MembershipStatus, DomainError> {
        if !self.0.member_exists(contact) {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }
        let mut statuses = self.0.statuses.lock().unwrap();
        if statuses
            .iter()
            .any(|s| &s.contact_number == contact && s.is_active)
        {
            return Err(DomainError::new(
                ErrorCode::ActiveStatusExists,
                "Membership status already exists",
            ));
        }
        let status = MembershipStatus {
            id: next_id(&statuses, |s| s.id),
            contact_number: contact.clone(),
            period,
            is_active,
        };
        statuses.push(status.clone());
        Ok(status)
    }

    async fn find_active(
        &self,
        contact: &ContactNumber,
    ) -> Result<Option<MembershipStatus>, DomainError> {
        Ok(self
            .0
            .statuses
            .lock()
            .unwrap()
            .iter()
            .find(|s| &s.contact_number == contact && s.is_active)
            .cloned())
    }

    async fn list_active(&self) -> Result<Vec<MembershipStatus>, DomainError> {
        Ok(self
            .0
            .statuses
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        contact: &ContactNumber,
        patch: &StatusPatch,
    ) -> Result<(), DomainError> {
        let mut statuses = self.0.statuses.lock().unwrap();
        let mut matched = false;
        for status in statuses.iter_mut().filter(|s| &s.contact_number == contact) {
            let start = patch.start_date.unwrap_or(status.period.start_date());
            let end = patch.end_date.unwrap_or(status.period.end_date());
            let period = StatusPeriod::new(start, end)
                .map_err(|_| DomainError::new(ErrorCode::ValidationFailed, "End date must exceed start date"))?;
            status.period = period;
            if let Some(active) = patch.is_active {
                status.is_active = active;
            }
            matched = true;
        }
        if !matched {
            return Err(DomainError::new(
                ErrorCode::StatusNotFound,
                "Membership status not found",
            ));
        }
        Ok(())
    }

    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let mut statuses = self.0.statuses.lock().unwrap();
        let before = statuses.len();
        statuses.retain(|s| &s.contact_number != contact);
        if statuses.len() == before {
            return Err(DomainError::new(
                ErrorCode::StatusNotFound,
                "Membership status not found",
            ));
        }
        Ok(())
    }
}

struct Products(Arc<InMemoryBackOffice>);

#[async_trait]
impl ProductRepository for Products {
    async fn create(&self, product: &Product) -> Result<(), DomainError> {
        let mut products = self.0.products.lock().unwrap();
        if products.iter().any(|p| p.item_code == product.item_code) {
            return Err(DomainError::new(
                ErrorCode::ProductExists,
                "Product already exists",
            ));
        }
        products.push(product.clone());
        Ok(())
    }

    async fn find(&self, code: &ItemCode) -> Result<Option<Product>, DomainError> {
        Ok(self
            .0
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.item_code == code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.0.products.lock().unwrap().clone())
    }

    async fn update(&self, code: &ItemCode, patch: &ProductPatch) -> Result<(), DomainError> {
        let mut products = self.0.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| &p.item_code == code)
            .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))?;
        if let Some(price) = patch.sale_price {
            product.sale_price = price;
        }
        if let Some(name) = &patch.name {
            product.name = name.clone();
        }
        if let Some(image) = &patch.image {
            product.image = Some(image.clone());
        }
        Ok(())
    }

    async fn delete(&self, code: &ItemCode) -> Result<(), DomainError> {
        let mut products = self.0.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| &p.item_code != code);
        if products.len() == before {
            return Err(DomainError::new(
                ErrorCode::ProductNotFound,
                "Product not found",
            ));
        }
        Ok(())
    }
}

struct Plans(Arc<InMemoryBackOffice>);

#[async_trait]
impl MembershipPlanRepository for Plans {
    async fn create(&self, plan: &MembershipPlan) -> Result<(), DomainError> {
        let mut plans = self.0.plans.lock().unwrap();
        if plans.iter().any(|p| p.item_code == plan.item_code) {
            return Err(DomainError::new(
                ErrorCode::PlanExists,
                "Membership plan already exists",
            ));
        }
        plans.push(plan.clone());
        Ok(())
    }

    async fn find(&self, code: &ItemCode) -> Result<Option<MembershipPlan>, DomainError> {
        Ok(self
            .0
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.item_code == code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<MembershipPlan>, DomainError> {
        Ok(self.0.plans.lock().unwrap().clone())
    }

    async fn update(&self, code: &ItemCode, patch: &PlanPatch) -> Result<(), DomainError> {
        let mut plans = self.0.plans.lock().unwrap();
        let plan = plans
            .iter_mut()
            .find(|p| &p.item_code == code)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::PlanNotFound, "Membership plan not found")
            })?;
        if let Some(price) = patch.sale_price {
            plan.sale_price = price;
        }
        if let Some(plan_type) = &patch.plan_type {
            plan.plan_type = plan_type.clone();
        }
        if let Some(duration) = patch.duration_months {
            plan.duration_months = duration;
        }
        Ok(())
    }

    async fn delete(&self, code: &ItemCode) -> Result<(), DomainError> {
        let mut plans = self.0.plans.lock().unwrap();
        let before = plans.len();
        plans.retain(|p| &p.item_code != code);
        if plans.len() == before {
            return Err(DomainError::new(
                ErrorCode::PlanNotFound,
                "Membership plan not found",
            ));
        }
        Ok(())
    }
}

struct CheckIns(Arc<InMemoryBackOffice>);

#[async_trait]
impl CheckInRepository for CheckIns {
    async fn open(
        &self,
        contact: &ContactNumber,
        at: Timestamp,
    ) -> Result<CheckInRecord, DomainError> {
        if !self.0.member_exists(contact) {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }
        let mut check_ins = self.0.check_ins.lock().unwrap();
        if check_ins
            .iter()
            .any(|r| &r.contact_number == contact && r.is_open())
        {
            return Err(DomainError::new(
                ErrorCode::OpenCheckInExists,
                "Member already has an open check-in record",
            ));
        }
        let record = CheckInRecord {
            id: next_id(&check_ins, |r| r.id),
            contact_number: contact.clone(),
            check_in_at: at,
            check_out_at: None,
        };
        check_ins.push(record.clone());
        Ok(record)
    }

    async fn close_latest(
        &self,
        contact: &ContactNumber,
        at: Timestamp,
    ) -> Result<CheckInRecord, DomainError> {
        let mut check_ins = self.0.check_ins.lock().unwrap();
        let open = check_ins
            .iter_mut()
            .filter(|r| &r.contact_number == contact && r.is_open())
            .max_by_key(|r| r.id);
        match open {
            Some(record) => {
                record.check_out_at = Some(at);
                Ok(record.clone())
            }
            None => Err(DomainError::new(
                ErrorCode::CheckInNotFound,
                "No open check-in record for member",
            )),
        }
    }

    async fn records_for(
        &self,
        contact: &ContactNumber,
    ) -> Result<Vec<CheckInRecord>, DomainError> {
        let mut records: Vec<CheckInRecord> = self
            .0
            .check_ins
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.contact_number == contact)
            .cloned()
            .collect();
        records.sort_by_key(|r| std::cmp::Reverse(r.id));
        Ok(records)
    }

    async fn list(&self) -> Result<Vec<CheckInRecord>, DomainError> {
        Ok(self.0.check_ins.lock().unwrap().clone())
    }

    async fn delete_for(&self, contact: &ContactNumber) -> Result<(), DomainError> {
        let mut check_ins = self.0.check_ins.lock().unwrap();
        let before = check_ins.len();
        check_ins.retain(|r| &r.contact_number != contact);
        if check_ins.len() == before {
            return Err(DomainError::new(
                ErrorCode::CheckInNotFound,
                "Check-in record not found",
            ));
        }
        Ok(())
    }
}

struct Transactions(Arc<InMemoryBackOffice>);

#[async_trait]
impl TransactionRepository for Transactions {
    async fn record(
        &self,
        draft: &TransactionDraft,
        at: Timestamp,
    ) -> Result<TransactionRecord, DomainError> {
        if !self.0.member_exists(&draft.contact_number) {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }
        if !self.0.item_exists(&draft.item_code) {
            return Err(DomainError::new(ErrorCode::ItemNotFound, "Item not found"));
        }
        let mut transactions = self.0.transactions.lock().unwrap();
        let record = TransactionRecord {
            id: next_id(&transactions, |t| t.id),
            contact_number: draft.contact_number.clone(),
            recorded_at: at,
            item_code: draft.item_code.clone(),
            count: draft.count,
            unit_price: draft.unit_price,
            discount: draft.discount.as_f64(),
            total_amount: draft.total_amount(),
            payment_method: draft.payment_method,
        };
        transactions.push(record.clone());
        Ok(record)
    }

    async fn for_member(
        &self,
        contact: &ContactNumber,
    ) -> Result<Vec<TransactionRecord>, DomainError> {
        if !self.0.member_exists(contact) {
            return Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            ));
        }
        let mut records: Vec<TransactionRecord> = self
            .0
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.contact_number == contact)
            .cloned()
            .collect();
        records.sort_by_key(|t| std::cmp::Reverse(t.id));
        Ok(records)
    }

    async fn list(&self) -> Result<Vec<TransactionRecord>, DomainError> {
        Ok(self.0.transactions.lock().unwrap().clone())
    }

    async fn amend(
        &self,
        contact: &ContactNumber,
        id: i64,
        patch: &TransactionPatch,
    ) -> Result<TransactionRecord, DomainError> {
        if !self.0.member_exists(contact) {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }
        let mut transactions = self.0.transactions.lock().unwrap();
        let record = transactions.iter_mut().find(|t| t.id == id).ok_or_else(|| {
            DomainError::new(ErrorCode::TransactionNotFound, "Transaction record not found")
        })?;
        if let Some(code) = &patch.item_code {
            record.item_code = code.clone();
        }
        if let Some(count) = patch.count {
            record.count = count;
        }
        if let Some(price) = patch.unit_price {
            record.unit_price = price;
        }
        if let Some(discount) = patch.discount {
            record.discount = discount.as_f64();
        }
        if let Some(method) = patch.payment_method {
            record.payment_method = method;
        }
        if patch.touches_pricing() {
            record.total_amount = total_amount(
                record.count,
                record.unit_price,
                Discount::new(record.discount).unwrap(),
            );
        }
        Ok(record.clone())
    }

    async fn remove(&self, contact: &ContactNumber, id: i64) -> Result<(), DomainError> {
        if !self.0.member_exists(contact) {
            return Err(DomainError::new(
                ErrorCode::InvalidReference,
                "Member does not exist",
            ));
        }
        let mut transactions = self.0.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Err(DomainError::new(
                ErrorCode::TransactionNotFound,
                "Transaction record not found",
            ));
        }
        Ok(())
    }
}

/// Build the full router backed by an in-memory store.
pub fn test_app() -> Router {
    let store = Arc::new(InMemoryBackOffice::default());
    let state = AppState {
        members: Arc::new(Members(store.clone())),
        photos: Arc::new(Photos(store.clone())),
        statuses: Arc::new(Statuses(store.clone())),
        products: Arc::new(Products(store.clone())),
        plans: Arc::new(Plans(store.clone())),
        check_ins: Arc::new(CheckIns(store.clone())),
        transactions: Arc::new(Transactions(store)),
    };
    api_router(state)
}

/// Dispatch a JSON request and return the status plus parsed body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
