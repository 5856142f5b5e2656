pub mod expense_form;
