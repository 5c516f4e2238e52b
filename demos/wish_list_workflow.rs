//! Wish List Approval Workflow
//!
//! This example walks a wish list item through every approval tier.
//!
//! Key concepts:
//! - Two-tier approval (leader, then director for expensive items)
//! - Role checks against the item's owner
//! - Realization gated on invoiced costs
//! - Terminal statuses (Realized, Rejected) refuse every operation
//!
//! Run with: cargo run --example wish_list_workflow

use wishlist::org::OrgUser;
use wishlist::{Cost, Operation, WishListItem, WishListItemStatus};

fn report(item: &WishListItem<OrgUser>) {
    println!(
        "  Status: {} (allowed next: {:?})",
        item.status(),
        item.allowed_operations()
    );
}

fn main() {
    println!("=== Wish List Approval Workflow ===\n");

    // Org chart
    let owner = OrgUser::new();
    let leader = OrgUser::new().leading(&owner);
    let director = OrgUser::new().directing(&owner);
    let supervisor = OrgUser::new().supervisor();
    let colleague = OrgUser::new();

    let cost: Cost = "7250.00".parse().unwrap();
    let mut item = WishListItem::new(WishListItemStatus::Requested, owner.clone(), cost);
    println!("Created wish list item costing {}", cost);
    report(&item);

    // A colleague has no say over the request
    println!("\nColleague tries to accept:");
    match item.accept_by(&colleague) {
        Ok(status) => println!("  Unexpectedly moved to {}", status),
        Err(e) => println!("  Refused: {}", e),
    }

    // Leader accepts, but the cost needs a director as well
    println!("\nLeader accepts:");
    let status = item.accept_by(&leader).unwrap();
    println!("  Moved to {}", status);
    report(&item);

    println!("\nDirector accepts:");
    let status = item.accept_by(&director).unwrap();
    println!("  Moved to {}", status);
    report(&item);

    // Realization is the supervisor's job
    println!("\nSupervisor starts and finishes realization:");
    for operation in [Operation::StartRealization, Operation::FinishRealization] {
        let status = item.perform(operation, &supervisor).unwrap();
        println!("  {} -> {}", operation, status);
    }
    report(&item);

    println!("\nLeader tries to reject a realized item:");
    if let Err(e) = item.reject_by(&leader) {
        println!("  Refused: {}", e);
    }

    // Costs must be invoiced before realization can finish
    println!("\n--- Uninvoiced item ---");
    let mut uninvoiced = WishListItem::with_invoicing(
        WishListItemStatus::InRealization,
        owner,
        Cost::from_major_units(120),
        false,
    );
    report(&uninvoiced);
    if let Err(e) = uninvoiced.finish_realization_by(&supervisor) {
        println!("  Refused: {}", e);
    }
    report(&uninvoiced);

    println!("\n=== Workflow Complete ===");
}
