//! Checkout page: customer details, then payment and order hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the cart from `CartStore` and payment methods from the
//! `PaymentMethodsState` context. The step machine and form live in a local
//! `CheckoutState` signal; nothing here outlives the page.
//!
//! ERROR HANDLING
//! ==============
//! Placing an order goes through the `SharedSubmitter` in context (messenger
//! hand-off when none is provided). Failures are logged and shown inline;
//! a blocked popup is not retried.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use leptos::prelude::*;

use crate::net::types::PaymentMethod;
use crate::order::message::OrderSummary;
use crate::order::submit::{MessengerHandoff, OrderSubmitter, SharedSubmitter, SubmitError, SubmitReceipt};
use crate::state::cart::{CartItem, CartState, CartStore};
use crate::state::catalog::PaymentMethodsState;
use crate::state::checkout::{CheckoutState, CheckoutStep, ServiceType};
use crate::util::format::{displayed_total, peso};
use crate::util::images::QR_FALLBACK_URL;
use crate::util::scroll::scroll_to_top;

/// `"₱120.00 x 2"` under each summary line.
pub fn unit_times_quantity(line: &CartItem) -> String {
    format!("{} x {}", peso(line.total_price), line.quantity)
}

/// QR image for a method; blank URLs use the fallback image directly.
pub fn qr_source(method: &PaymentMethod) -> &str {
    if method.qr_code_url.trim().is_empty() { QR_FALLBACK_URL } else { &method.qr_code_url }
}

/// Build the order from the current form and cart and hand it to `submitter`.
///
/// # Errors
///
/// Propagates the submitter's [`SubmitError`].
pub fn place_order(
    submitter: &dyn OrderSubmitter,
    checkout: &CheckoutState,
    cart: &CartState,
    methods: &[PaymentMethod],
) -> Result<SubmitReceipt, SubmitError> {
    let order = OrderSummary::new(checkout, cart, methods);
    submitter.submit(&order)
}

#[component]
fn OrderLines(cart: ReadSignal<CartState>) -> impl IntoView {
    view! {
        <div class="checkout__lines">
            {move || {
                cart.with(|c| {
                    c.items
                        .iter()
                        .map(|line| {
                            let variation = line.selected_variation.as_ref().map(|v| format!("Size: {}", v.name));
                            let add_ons = line.add_ons_label().map(|a| format!("Add-ons: {a}"));
                            view! {
                                <div class="checkout__line">
                                    <div>
                                        <h4 class="checkout__line-name">{line.name.clone()}</h4>
                                        {variation.map(|v| view! { <p class="checkout__line-meta">{v}</p> })}
                                        {add_ons.map(|a| view! { <p class="checkout__line-meta">{a}</p> })}
                                        <p class="checkout__line-meta">{unit_times_quantity(line)}</p>
                                    </div>
                                    <span class="checkout__line-subtotal">{peso(line.subtotal())}</span>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
            <div class="checkout__total">
                <span>"Total:"</span>
                <span class="checkout__total-amount">{move || peso(displayed_total(cart.with(CartState::total_price)))}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Checkout(on_back: Callback<()>) -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let payment_methods = expect_context::<RwSignal<PaymentMethodsState>>();
    let submitter = use_context::<SharedSubmitter>().unwrap_or_else(|| std::sync::Arc::new(MessengerHandoff::default()));
    let submitter = StoredValue::new(submitter);

    let checkout = RwSignal::new(CheckoutState::default());
    let submit_error = RwSignal::new(None::<String>);
    let step = Memo::new(move |_| checkout.with(|c| c.step));

    Effect::new(move || {
        step.track();
        scroll_to_top();
    });

    Effect::new(move || {
        let methods = payment_methods.with(|p| p.methods.clone());
        if checkout.with_untracked(|c| c.payment_method_id.is_none()) && !methods.is_empty() {
            checkout.update(|c| {
                c.ensure_default_payment_method(&methods);
            });
        }
    });

    let total = move || peso(displayed_total(cart.total_price()));

    let on_place_order = move |_| {
        let result = submitter.with_value(|s| {
            checkout.with_untracked(|c| {
                cart.state()
                    .with_untracked(|cart| payment_methods.with_untracked(|p| place_order(s.as_ref(), c, cart, &p.methods)))
            })
        });
        match result {
            Ok(receipt) => {
                leptos::logging::log!("order handed off: {}", receipt.url);
                submit_error.set(None);
            }
            Err(e) => {
                leptos::logging::warn!("order hand-off failed: {e}");
                submit_error.set(Some(e.to_string()));
            }
        }
    };

    let details_step = move || {
        view! {
            <div class="checkout container-minimal">
                <div class="checkout__header">
                    <button class="checkout__back" on:click=move |_| on_back.run(())>"← Back to Cart"</button>
                    <h1>"Order Details"</h1>
                </div>
                <div class="checkout__layout">
                    <section class="card-elevated checkout__panel">
                        <h2>"Order Summary"</h2>
                        <OrderLines cart=cart.state()/>
                    </section>

                    <section class="card-elevated checkout__panel">
                        <h2>"Customer Information"</h2>
                        <form class="checkout__form" on:submit=|ev| ev.prevent_default()>
                            <label class="checkout__label">"Full Name *"</label>
                            <input
                                class="checkout__input"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || checkout.with(|c| c.customer_name.clone())
                                on:input=move |ev| checkout.update(|c| c.customer_name = event_target_value(&ev))
                            />

                            <label class="checkout__label">"Contact Number *"</label>
                            <input
                                class="checkout__input"
                                type="tel"
                                placeholder="09XX XXX XXXX"
                                prop:value=move || checkout.with(|c| c.contact_number.clone())
                                on:input=move |ev| checkout.update(|c| c.contact_number = event_target_value(&ev))
                            />

                            <label class="checkout__label">"Service Type *"</label>
                            <div class="checkout__service-types">
                                {ServiceType::ALL
                                    .into_iter()
                                    .map(|service| {
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if checkout.with(|c| c.service_type == service) {
                                                        "checkout__service checkout__service--active"
                                                    } else {
                                                        "checkout__service"
                                                    }
                                                }
                                                on:click=move |_| checkout.update(|c| c.service_type = service)
                                            >
                                                <div class="checkout__service-icon">{service.icon()}</div>
                                                <div class="checkout__service-label">{service.label()}</div>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <label class="checkout__label">"Special Instructions"</label>
                            <textarea
                                class="checkout__input"
                                rows="3"
                                placeholder="Any special requests or notes..."
                                prop:value=move || checkout.with(|c| c.notes.clone())
                                on:input=move |ev| checkout.update(|c| c.notes = event_target_value(&ev))
                            ></textarea>

                            <button
                                type="button"
                                class="btn-primary checkout__proceed"
                                disabled=move || !checkout.with(CheckoutState::is_details_valid)
                                on:click=move |_| checkout.update(|c| {
                                    c.proceed_to_payment();
                                })
                            >
                                "Proceed to Payment"
                            </button>
                        </form>
                    </section>
                </div>
            </div>
        }
    };

    let payment_step = move || {
        let selected = move || checkout.with(|c| payment_methods.with(|p| c.selected_payment_method(&p.methods).cloned()));
        view! {
            <div class="checkout container-minimal">
                <div class="checkout__header">
                    <button class="checkout__back" on:click=move |_| checkout.update(CheckoutState::back_to_details)>
                        "← Back to Details"
                    </button>
                    <h1>"Secure Payment"</h1>
                </div>
                <div class="checkout__layout">
                    <section class="card-elevated checkout__panel">
                        <h2>"Choose Payment Method"</h2>
                        <div class="checkout__methods">
                            {move || {
                                payment_methods.with(|p| {
                                    p.methods
                                        .iter()
                                        .map(|method| {
                                            let id = method.id.clone();
                                            let active_id = method.id.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if checkout.with(|c| c.payment_method_id.as_deref() == Some(active_id.as_str())) {
                                                            "checkout__method checkout__method--active"
                                                        } else {
                                                            "checkout__method"
                                                        }
                                                    }
                                                    on:click=move |_| checkout.update(|c| c.payment_method_id = Some(id.clone()))
                                                >
                                                    "💳 "{method.name.clone()}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </div>

                        {move || selected().map(|method| view! {
                            <div class="checkout__payment-details">
                                <h3>"Payment Details"</h3>
                                <div class="checkout__payment-grid">
                                    <div>
                                        <p class="checkout__muted">{method.name.clone()}</p>
                                        <p class="checkout__account-number">{method.account_number.clone()}</p>
                                        <p class="checkout__muted">"Account Name: "{method.account_name.clone()}</p>
                                        <p class="checkout__amount">"Amount: "{total}</p>
                                    </div>
                                    <div class="checkout__qr">
                                        <img
                                            class="checkout__qr-image"
                                            src=qr_source(&method).to_owned()
                                            alt=format!("{} QR Code", method.name)
                                            on:error=move |ev| crate::util::images::swap_to_fallback(&ev, QR_FALLBACK_URL)
                                        />
                                        <p class="checkout__muted">"Scan to pay"</p>
                                    </div>
                                </div>
                            </div>
                        })}

                        <div class="checkout__notice">
                            <h4>"Payment Proof Required"</h4>
                            <p>
                                "After making your payment, please take a screenshot of your payment receipt and attach it when you send your order via Messenger. This helps us verify and process your order quickly and securely."
                            </p>
                        </div>
                    </section>

                    <section class="card-elevated checkout__panel">
                        <h2>"Final Order Summary"</h2>
                        <div class="checkout__customer">
                            <h4>"Customer Details"</h4>
                            <p>"Name: "{move || checkout.with(|c| c.customer_name.clone())}</p>
                            <p>"Contact: "{move || checkout.with(|c| c.contact_number.clone())}</p>
                            <p>"Service: "{move || checkout.with(|c| c.service_type.label())}</p>
                        </div>
                        <OrderLines cart=cart.state()/>
                        <button class="btn-primary checkout__place" on:click=on_place_order>
                            "Place Order via Messenger"
                        </button>
                        {move || submit_error.get().map(|e| view! { <p class="checkout__error">{e}</p> })}
                        <p class="checkout__fineprint">
                            "You'll be redirected to Facebook Messenger to confirm your order. Don't forget to attach your payment screenshot!"
                        </p>
                    </section>
                </div>
            </div>
        }
    };

    move || match step.get() {
        CheckoutStep::Details => details_step().into_any(),
        CheckoutStep::Payment => payment_step().into_any(),
    }
}
