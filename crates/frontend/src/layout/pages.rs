use crate::dashboards::d400_portfolio::ui::PortfolioDashboard;
use crate::dashboards::d401_holdings::ui::HoldingsDashboard;
use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_transaction::ui::list::TransactionList;
use crate::domain::a003_security::ui::list::SecurityList;
use crate::domain::a004_trade_entry::ui::list::TradeEntryList;
use crate::domain::a005_trade_exit::ui::list::TradeExitList;
use crate::layout::global_context::Page;
use leptos::prelude::*;

/// Central page registry. Every page of the application renders from here.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! {
            <div class="page-stack">
                <PortfolioDashboard />
                <HoldingsDashboard />
            </div>
        }
        .into_any(),
        Page::Accounts => view! {
            <div class="page-stack">
                <AccountList />
                <TransactionList />
            </div>
        }
        .into_any(),
        Page::Securities => view! {
            <div class="page-stack">
                <SecurityList />
            </div>
        }
        .into_any(),
        Page::Trades => view! {
            <div class="page-stack">
                <TradeEntryList />
                <TradeExitList />
            </div>
        }
        .into_any(),
    }
}
