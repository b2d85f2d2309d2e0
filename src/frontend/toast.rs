use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

const TOAST_LIMIT: usize = 3;
const TOAST_DISMISS_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    title: AttrValue,
    description: AttrValue,
    variant: ToastVariant,
}

pub enum ToastAction {
    Show {
        title: AttrValue,
        description: AttrValue,
        variant: ToastVariant,
    },
    Dismiss(u64),
}

/// Visible toasts, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show {
                title,
                description,
                variant,
            } => {
                next.next_id += 1;
                next.toasts.insert(
                    0,
                    Toast {
                        id: next.next_id,
                        title,
                        description,
                        variant,
                    },
                );
                next.toasts.truncate(TOAST_LIMIT);
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl ToastHandle {
    pub fn show(&self, title: &'static str, description: impl Into<AttrValue>, variant: ToastVariant) {
        self.dispatcher.dispatch(ToastAction::Show {
            title: AttrValue::from(title),
            description: description.into(),
            variant,
        });
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |&id| {
            let timeout = Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let variant_class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    };

    html! {
        <li class={variant_class} role="status">
            <div class="toast-copy">
                <p class="toast-title">{props.toast.title.clone()}</p>
                <p class="toast-description">{props.toast.description.clone()}</p>
            </div>
            <button class="toast-close" type="button" aria-label="Dismiss notification" {onclick}>
                {"×"}
            </button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = ToastHandle {
        dispatcher: list.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = list.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <ol class="toast-viewport" aria-live="polite">
                { for list.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </ol>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn show(list: Rc<ToastList>, title: &'static str) -> Rc<ToastList> {
        list.reduce(ToastAction::Show {
            title: AttrValue::from(title),
            description: AttrValue::from(""),
            variant: ToastVariant::Default,
        })
    }

    #[wasm_bindgen_test]
    fn keeps_the_three_newest_toasts() {
        let mut list = Rc::new(ToastList::default());
        for title in ["one", "two", "three", "four"] {
            list = show(list, title);
        }

        let titles: Vec<&str> = list.toasts.iter().map(|toast| toast.title.as_str()).collect();
        assert_eq!(titles, vec!["four", "three", "two"]);
    }

    #[wasm_bindgen_test]
    fn dismiss_removes_only_the_named_toast() {
        let list = show(show(Rc::new(ToastList::default()), "first"), "second");
        let first_id = list.toasts[1].id;

        let list = list.reduce(ToastAction::Dismiss(first_id));

        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].title.as_str(), "second");
    }
}
