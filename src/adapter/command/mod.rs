mod close_handler;
mod deposit_handler;
mod open_handler;
mod pay_loan_handler;
mod request_loan_handler;
mod stage_handlers;
mod withdraw_all_handler;
mod withdraw_handler;
