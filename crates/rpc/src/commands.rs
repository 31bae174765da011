//! CLI commands

use rust_decimal::Decimal;
use stipend_core::{Amount, Principal, Role};
use stipend_custody::CustodyLedger;
use stipend_events::LifecycleEvent;
use stipend_roles::RoleGate;

use crate::context::AppContext;

/// Grant a role to a principal (administrative path)
pub fn grant(ctx: &mut AppContext, role: &str, who: &str) -> Result<(), anyhow::Error> {
    let role = Role::from_str(&role.to_uppercase())
        .ok_or_else(|| anyhow::anyhow!("unknown role: {} (REVIEWER or ADMIN)", role))?;
    let who = Principal::new(who);

    ctx.roles.grant(role, &who);
    ctx.record_admin(LifecycleEvent::RoleGranted {
        role,
        who: who.clone(),
    });
    ctx.save()?;

    println!("Granted {} to {}", role, who);
    Ok(())
}

/// Fund the custodial pool (administrative path)
pub fn fund(ctx: &mut AppContext, amount: Decimal) -> Result<(), anyhow::Error> {
    let amount = Amount::new(amount)?;

    ctx.custody.fund(amount);
    ctx.record_admin(LifecycleEvent::Funded { amount });
    ctx.save()?;

    println!("Pool funded with {} (balance: {})", amount, ctx.custody.balance());
    Ok(())
}

/// Submit a new application
pub fn submit(
    ctx: &mut AppContext,
    applicant: &str,
    info: &str,
    amount: Decimal,
) -> Result<(), anyhow::Error> {
    let amount = Amount::new(amount)?;

    let id = ctx
        .registry
        .submit(Principal::new(applicant), info, amount);
    ctx.save()?;

    println!("Application {} submitted by {} for {}", id, applicant, amount);
    Ok(())
}

/// Verify an application (reviewer-gated)
pub fn verify(ctx: &mut AppContext, id: u64, caller: &str) -> Result<(), anyhow::Error> {
    ctx.registry.verify(id, &Principal::new(caller))?;
    ctx.save()?;

    println!("Application {} verified by {}", id, caller);
    Ok(())
}

/// Sign an application (reviewer-gated)
pub fn sign(ctx: &mut AppContext, id: u64, caller: &str) -> Result<(), anyhow::Error> {
    ctx.registry.sign(id, &Principal::new(caller))?;
    ctx.save()?;

    let app = ctx
        .registry
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("application {} vanished after signing", id))?;
    println!(
        "Application {} signed by {} ({}/{} approvals{})",
        id,
        caller,
        app.approval_count,
        ctx.registry.required_approvals(),
        if app.stage.is_approved() { ", approved" } else { "" },
    );
    Ok(())
}

/// Claim an approved application's funds
pub fn claim(ctx: &mut AppContext, id: u64, caller: &str) -> Result<(), anyhow::Error> {
    let AppContext {
        registry, custody, ..
    } = ctx;
    let paid = registry.claim(id, &Principal::new(caller), custody)?;
    ctx.save()?;

    println!(
        "Application {} claimed by {}: {} transferred (pool balance: {})",
        id,
        caller,
        paid,
        ctx.custody.balance()
    );
    Ok(())
}

/// Show the pool balance
pub fn balance(ctx: &AppContext) -> Result<(), anyhow::Error> {
    println!("Pool balance: {}", ctx.custody.balance());
    Ok(())
}

/// Show a single application
pub fn show(ctx: &AppContext, id: u64) -> Result<(), anyhow::Error> {
    let app = ctx
        .registry
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("no application with id {}", id))?;

    println!("Application {}", app.id);
    println!("  applicant: {}", app.applicant);
    println!("  info:      {}", app.info);
    println!("  amount:    {}", app.amount);
    println!(
        "  stage:     {} ({}/{} approvals)",
        app.stage.as_str(),
        app.approval_count,
        ctx.registry.required_approvals()
    );
    let signers = ctx.registry.signers(id);
    if !signers.is_empty() {
        let names: Vec<&str> = signers.iter().map(|p| p.as_str()).collect();
        println!("  signers:   {}", names.join(", "));
    }
    Ok(())
}

/// List all applications
pub fn list(ctx: &AppContext) -> Result<(), anyhow::Error> {
    if ctx.registry.applications().is_empty() {
        println!("No applications");
        return Ok(());
    }
    for app in ctx.registry.applications() {
        println!(
            "{:>4}  {:<12} {:>12}  {} ({}/{})",
            app.id,
            app.applicant,
            app.amount.to_string(),
            app.stage.as_str(),
            app.approval_count,
            ctx.registry.required_approvals()
        );
    }
    Ok(())
}
