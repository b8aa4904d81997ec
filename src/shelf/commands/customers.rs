use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Customer;
use crate::store::DataStore;

#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub fn add<S: DataStore>(store: &mut S, draft: CustomerDraft) -> Result<CmdResult> {
    let mut library = store.load()?;

    let customer = Customer {
        customer_id: library.allocate_customer_id(),
        first_name: draft.first_name,
        last_name: draft.last_name,
        email: draft.email,
    };
    library.customers.push(customer.clone());
    store.save(&library)?;

    let mut result = CmdResult::default().with_customers(vec![customer.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Customer added (#{}): {}",
        customer.customer_id,
        customer.full_name()
    )));
    Ok(result)
}

pub fn update<S: DataStore>(store: &mut S, id: u32, draft: CustomerDraft) -> Result<CmdResult> {
    let mut library = store.load()?;

    let customer = library
        .customer_mut(id)
        .ok_or(ShelfError::CustomerNotFound(id))?;
    customer.first_name = draft.first_name;
    customer.last_name = draft.last_name;
    customer.email = draft.email;
    let updated = customer.clone();

    store.save(&library)?;

    let mut result = CmdResult::default().with_customers(vec![updated.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Customer updated (#{}): {}",
        updated.customer_id,
        updated.full_name()
    )));
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut library = store.load()?;

    let position = library
        .customers
        .iter()
        .position(|c| c.customer_id == id)
        .ok_or(ShelfError::CustomerNotFound(id))?;
    let removed = library.customers.remove(position);

    store.save(&library)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Customer removed (#{}): {}",
        removed.customer_id,
        removed.full_name()
    )));
    Ok(result)
}
