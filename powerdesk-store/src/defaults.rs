//! Built-in module directory.
//!
//! `default_catalog()` is the directory a store answers with when no
//! `modules.yaml` override exists. It lists every PowerDesk business module
//! and the entities whose forms, list views and workflows administrators can
//! configure.

use powerdesk_fields::ModuleCatalog;

/// The standard PowerDesk module directory.
pub fn default_catalog() -> ModuleCatalog {
    ModuleCatalog::new()
        .module("crm", "CRM")
        .entity("crm", "leads", "Leads")
        .entity("crm", "customers", "Customers")
        .entity("crm", "contacts", "Contacts")
        .module("sales", "Sales")
        .entity("sales", "quotations", "Quotations")
        .entity("sales", "orders", "Orders")
        .module("inventory", "Inventory")
        .entity("inventory", "items", "Items")
        .entity("inventory", "warehouses", "Warehouses")
        .entity("inventory", "stock_entries", "Stock Entries")
        .module("accounts", "Accounts")
        .entity("accounts", "invoices", "Invoices")
        .entity("accounts", "payments", "Payments")
        .entity("accounts", "expenses", "Expenses")
        .module("hrms", "HR")
        .entity("hrms", "employees", "Employees")
        .entity("hrms", "attendance", "Attendance")
        .entity("hrms", "payroll", "Payroll")
        .module("production", "Production")
        .entity("production", "work_orders", "Work Orders")
        .entity("production", "boms", "Bills of Materials")
        .module("projects", "Projects")
        .entity("projects", "projects", "Projects")
        .entity("projects", "tasks", "Tasks")
}
